//! RTE interface call detection.
//!
//! Scans preprocessed text with a fixed, ordered table of naming
//! conventions. Scan order is file, then table order, then match
//! offset, which fixes the report order for interface calls.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::preprocess::line_at_offset;
use crate::scanner::SourceMap;
use crate::symbols::{Confidence, FunctionRecord};
use super::types::{RteCallRecord, RteDirection};

pub const UNRESOLVED_CALLER_NOTE: &str = "caller function unresolved";

/// Naming conventions in detection order. The implicit access variants
/// sit next to their explicit counterparts, sharing a direction.
static RTE_PATTERNS: Lazy<Vec<(Regex, RteDirection)>> = Lazy::new(|| {
    [
        (r"\bRte_Read_([A-Za-z0-9_]+)\b", RteDirection::Read),
        (r"\bRte_IRead_([A-Za-z0-9_]+)\b", RteDirection::Read),
        (r"\bRte_Write_([A-Za-z0-9_]+)\b", RteDirection::Write),
        (r"\bRte_IWrite_([A-Za-z0-9_]+)\b", RteDirection::Write),
        (r"\bRte_IStatus_([A-Za-z0-9_]+)\b", RteDirection::Status),
        (r"\bRte_Call_([A-Za-z0-9_]+)\b", RteDirection::Call),
        (r"\bRte_IrvRead_([A-Za-z0-9_]+)\b", RteDirection::IrvRead),
        (r"\bRte_IrvWrite_([A-Za-z0-9_]+)\b", RteDirection::IrvWrite),
        (r"\bRte_Prm_([A-Za-z0-9_]+)\b", RteDirection::Prm),
        (r"\bRte_Mode_([A-Za-z0-9_]+)\b", RteDirection::Mode),
        (r"\bRte_Switch_([A-Za-z0-9_]+)\b", RteDirection::Switch),
    ]
    .into_iter()
    .map(|(pattern, direction)| (Regex::new(pattern).unwrap(), direction))
    .collect()
});

/// Detects RTE interface call sites and resolves their callers.
pub struct RteCallDetector;

impl RteCallDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scan every file. `functions` are this run's function records,
    /// used to resolve the enclosing caller per call site.
    pub fn detect(&self, sources: &SourceMap, functions: &[FunctionRecord]) -> Vec<RteCallRecord> {
        let mut records = Vec::new();
        for (path, source) in sources {
            self.detect_in_file(source, path, functions, &mut records);
        }
        records
    }

    fn detect_in_file(
        &self,
        source: &str,
        file: &str,
        functions: &[FunctionRecord],
        records: &mut Vec<RteCallRecord>,
    ) {
        for (pattern, direction) in RTE_PATTERNS.iter() {
            for m in pattern.find_iter(source) {
                let api = m.as_str();
                let line = line_at_offset(source, m.start());
                let (port, data_element, callee) = decompose_api(api, *direction);

                let caller = enclosing_function(functions, file, line)
                    .map(|f| f.name.clone())
                    .unwrap_or_default();

                let mut evidence = format!("regex match: {}", pattern.as_str());
                let confidence = if caller.is_empty() {
                    evidence.push_str(" | ");
                    evidence.push_str(UNRESOLVED_CALLER_NOTE);
                    Confidence::Low
                } else {
                    Confidence::High
                };

                records.push(RteCallRecord {
                    api: api.to_string(),
                    direction: *direction,
                    port,
                    data_element,
                    callee,
                    caller_function: caller,
                    file: file.to_string(),
                    line,
                    swc: String::new(),
                    evidence,
                    confidence,
                });
            }
        }
    }
}

impl Default for RteCallDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort split of an API token into port, data element, and
/// callee. Tokens too short to carry a port and element leave all
/// three empty; this never fails.
fn decompose_api(api: &str, direction: RteDirection) -> (String, String, String) {
    let empty = || (String::new(), String::new(), String::new());

    if !api.contains('_') {
        return empty();
    }
    let tail = api.strip_prefix("Rte_").unwrap_or(api);
    let rest = match tail.split_once('_') {
        Some((_, rest)) => rest,
        None => return empty(),
    };
    let parts: Vec<&str> = rest.split('_').collect();
    if parts.len() < 2 {
        return empty();
    }

    let port = parts[0].to_string();
    let remainder = parts[1..].join("_");
    match direction {
        RteDirection::Call => (port, String::new(), remainder),
        _ => (port, remainder, String::new()),
    }
}

/// The function from the same file with the greatest starting line not
/// past the call line. Ties go to the later record.
fn enclosing_function<'a>(
    functions: &'a [FunctionRecord],
    file: &str,
    line: u32,
) -> Option<&'a FunctionRecord> {
    functions
        .iter()
        .filter(|f| f.file == file && f.line <= line)
        .max_by_key(|f| f.line)
}
