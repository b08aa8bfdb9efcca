//! Symbol record types shared by both extraction strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of how much trust a record deserves.
///
/// Ordered: `Low < Medium < High`. Merging may promote a record's
/// confidence but never lowers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Heuristic result, likely incomplete or imprecise.
    Low,
    /// Heuristic result corroborated by a second signal.
    Medium,
    /// Produced by syntax-aware analysis or fully resolved.
    High,
}

impl Confidence {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage classification of a symbol.
///
/// The AST extractor distinguishes `static` from external linkage; the
/// pattern extractor can only tell `static` from "no static keyword seen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    Static,
    Global,
    Unknown,
}

impl StorageClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Global => "global",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A function definition found in a source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// Function name
    pub name: String,
    /// Normalized signature, `{return type} {name}({params})`
    pub signature: String,
    /// Source file
    pub file: String,
    /// 1-based line of the definition
    pub line: u32,
    /// Storage classification
    pub storage: StorageClass,
    /// Inferred SWC name, empty until resolved
    pub swc: String,
    /// How this record was produced
    pub evidence: String,
    /// Trust classification
    pub confidence: Confidence,
}

/// A variable declaration found in a source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Variable name
    pub name: String,
    /// Declared type, whitespace-normalized
    pub var_type: String,
    /// Source file
    pub file: String,
    /// 1-based line of the declaration
    pub line: u32,
    /// Storage classification
    pub storage: StorageClass,
    /// Inferred SWC name, empty until resolved
    pub swc: String,
    /// How this record was produced
    pub evidence: String,
    /// Trust classification
    pub confidence: Confidence,
}
