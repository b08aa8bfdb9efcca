//! Regex fallback extractor.
//!
//! Structural pattern matching over preprocessed text, used when the C
//! front end is unavailable or rejects the input. Coarse on purpose:
//! macro-made definitions are missed, only column-zero declarations are
//! treated as file-scope variables, and storage beyond `static` cannot
//! be told apart. Every record it emits carries low confidence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::preprocess::line_at_offset;
use super::normalize_ws;
use super::types::{Confidence, FunctionRecord, StorageClass, VariableRecord};

pub const FUNCTION_EVIDENCE: &str = "regex fallback (function def pattern)";
pub const VARIABLE_EVIDENCE: &str = "regex fallback (global var pattern)";

/// A function definition: optional `static`, a return type, a name, a
/// parameter list without `;`, then an opening brace. Prototypes end in
/// `;` and never match.
static FUNC_DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<storage>\bstatic\b\s+)?(?P<rtype>[A-Za-z_][\w\s*()]*?)\s+(?P<name>[A-Za-z_]\w*)\s*\((?P<params>[^;]*?)\)\s*\{",
    )
    .unwrap()
});

/// A file-scope variable: anchored to column zero so indented locals do
/// not match, optional initializer, terminating `;`. The type class has
/// no parentheses, which keeps prototypes out.
static GLOBAL_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(?P<storage>\bstatic\b\s+)?(?P<vartype>[A-Za-z_][\w\s*]*?)\s+(?P<name>[A-Za-z_]\w*)\s*(=\s*[^;]+)?\s*;",
    )
    .unwrap()
});

/// Extracts symbols by structural pattern matching.
pub struct PatternExtractor;

impl PatternExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract function definition records from one preprocessed file.
    pub fn extract_functions(&self, source: &str, file: &str) -> Vec<FunctionRecord> {
        let mut records = Vec::new();

        for cap in FUNC_DEF_RE.captures_iter(source) {
            let offset = cap.get(0).map(|m| m.start()).unwrap_or(0);
            let name = cap.name("name").map(|m| m.as_str()).unwrap_or("");
            let rtype = normalize_ws(cap.name("rtype").map(|m| m.as_str()).unwrap_or(""));
            let params = normalize_ws(cap.name("params").map(|m| m.as_str()).unwrap_or(""));
            let storage = if cap.name("storage").is_some() {
                StorageClass::Static
            } else {
                StorageClass::Unknown
            };

            records.push(FunctionRecord {
                name: name.to_string(),
                signature: format!("{} {}({})", rtype, name, params),
                file: file.to_string(),
                line: line_at_offset(source, offset),
                storage,
                swc: String::new(),
                evidence: FUNCTION_EVIDENCE.to_string(),
                confidence: Confidence::Low,
            });
        }

        records
    }

    /// Extract file-scope variable records from one preprocessed file.
    pub fn extract_variables(&self, source: &str, file: &str) -> Vec<VariableRecord> {
        let mut records = Vec::new();

        for cap in GLOBAL_VAR_RE.captures_iter(source) {
            let offset = cap.get(0).map(|m| m.start()).unwrap_or(0);
            let name = cap.name("name").map(|m| m.as_str()).unwrap_or("");
            let var_type = normalize_ws(cap.name("vartype").map(|m| m.as_str()).unwrap_or(""));
            let storage = if cap.name("storage").is_some() {
                StorageClass::Static
            } else {
                StorageClass::Unknown
            };

            records.push(VariableRecord {
                name: name.to_string(),
                var_type,
                file: file.to_string(),
                line: line_at_offset(source, offset),
                storage,
                swc: String::new(),
                evidence: VARIABLE_EVIDENCE.to_string(),
                confidence: Confidence::Low,
            });
        }

        records
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}
