//! SWC name inference from file paths.
//!
//! Two rules, tried in order on separator-normalized paths: an RTE
//! contract header or source (`Rte_<Name>.h|c`) names the component
//! directly; otherwise an identifier-shaped parent directory does.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::SourceMap;
use crate::symbols::Confidence;

pub const NO_CANDIDATES_ISSUE: &str =
    "No SWC candidates could be inferred from file paths or directory names";

static RTE_FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Rte_([A-Za-z0-9_]+)\.(h|c)$").unwrap());

static COMPONENT_DIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// Outcome of resolving one file path to a component.
#[derive(Debug, Clone)]
pub struct SwcResolution {
    /// Component name, empty when unresolved
    pub swc: String,
    /// High when a rule matched, low otherwise
    pub confidence: Confidence,
    /// Which path produced this outcome
    pub evidence: String,
}

/// Infers SWC names from file paths.
pub struct ComponentResolver;

impl ComponentResolver {
    pub fn new() -> Self {
        Self
    }

    /// Apply the naming rules to one path.
    pub fn guess_component(&self, path: &str) -> Option<String> {
        let normalized = path.replace('\\', "/");
        let segments: Vec<&str> = normalized.split('/').collect();

        let base = segments.last().copied().unwrap_or("");
        if let Some(cap) = RTE_FILENAME_RE.captures(base) {
            return cap.get(1).map(|m| m.as_str().to_string());
        }

        if segments.len() >= 2 {
            let parent = segments[segments.len() - 2];
            if COMPONENT_DIR_RE.is_match(parent) {
                return Some(parent.to_string());
            }
        }

        None
    }

    /// Resolve one path, always producing an outcome.
    pub fn resolve(&self, path: &str) -> SwcResolution {
        match self.guess_component(path) {
            Some(swc) => SwcResolution {
                swc,
                confidence: Confidence::High,
                evidence: format!("SWC inferred from path/filename: {}", path),
            },
            None => SwcResolution {
                swc: String::new(),
                confidence: Confidence::Low,
                evidence: format!("SWC unresolved for file: {}", path),
            },
        }
    }

    /// Sorted, deduplicated component names over every input path.
    pub fn collect_candidates(&self, sources: &SourceMap) -> Vec<String> {
        let candidates: BTreeSet<String> = sources
            .keys()
            .filter_map(|path| self.guess_component(path))
            .collect();
        candidates.into_iter().collect()
    }
}

impl Default for ComponentResolver {
    fn default() -> Self {
        Self::new()
    }
}
