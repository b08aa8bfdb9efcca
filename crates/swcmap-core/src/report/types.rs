//! Report row types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::symbols::Confidence;

/// Column order of the flattened report.
pub const COLUMNS: [&str; 14] = [
    "swc",
    "kind",
    "name",
    "signature",
    "scope",
    "file",
    "line",
    "direction",
    "port",
    "data_element",
    "callee",
    "caller_function",
    "confidence",
    "evidence",
];

/// What a report row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Function,
    Variable,
    RteInterface,
}

impl RowKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Variable => "variable",
            Self::RteInterface => "rte_interface",
        }
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One flattened record. Fields that do not apply to the row's kind
/// stay empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    /// Inferred component, possibly empty
    pub swc: String,
    /// Row kind
    pub kind: RowKind,
    /// Symbol name or API token
    pub name: String,
    /// Function signature or variable type
    pub signature: String,
    /// Storage scope for symbol rows
    pub scope: String,
    /// Source file
    pub file: String,
    /// 1-based line
    pub line: u32,
    /// Call direction for interface rows
    pub direction: String,
    /// Port for interface rows
    pub port: String,
    /// Data element for interface rows
    pub data_element: String,
    /// Callee for interface rows
    pub callee: String,
    /// Enclosing function for interface rows
    pub caller_function: String,
    /// Trust classification
    pub confidence: Confidence,
    /// How the record was produced and mapped
    pub evidence: String,
}

impl ReportRow {
    /// Field values in [`COLUMNS`] order.
    pub fn fields(&self) -> [String; 14] {
        [
            self.swc.clone(),
            self.kind.name().to_string(),
            self.name.clone(),
            self.signature.clone(),
            self.scope.clone(),
            self.file.clone(),
            self.line.to_string(),
            self.direction.clone(),
            self.port.clone(),
            self.data_element.clone(),
            self.callee.clone(),
            self.caller_function.clone(),
            self.confidence.name().to_string(),
            self.evidence.clone(),
        ]
    }
}
