//! RTE interface call types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::symbols::Confidence;

/// Direction of an RTE interface call, taken from its naming convention.
///
/// Eleven conventions map onto nine directions: the implicit variants
/// `Rte_IRead_`/`Rte_IWrite_` share `read`/`write` with their explicit
/// counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RteDirection {
    Read,
    Write,
    Status,
    Call,
    IrvRead,
    IrvWrite,
    Prm,
    Mode,
    Switch,
}

impl RteDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::Status => "status",
            Self::Call => "call",
            Self::IrvRead => "irvread",
            Self::IrvWrite => "irvwrite",
            Self::Prm => "prm",
            Self::Mode => "mode",
            Self::Switch => "switch",
        }
    }
}

impl fmt::Display for RteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One detected RTE interface call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RteCallRecord {
    /// Matched API token, e.g. `Rte_Read_Port1_Value`
    pub api: String,
    /// Call direction from the naming convention
    pub direction: RteDirection,
    /// Port name, best effort, possibly empty
    pub port: String,
    /// Data element for data access conventions, possibly empty
    pub data_element: String,
    /// Invoked operation for `call` conventions, possibly empty
    pub callee: String,
    /// Enclosing function name, empty when unresolved
    pub caller_function: String,
    /// Source file
    pub file: String,
    /// 1-based line of the match
    pub line: u32,
    /// Inferred SWC name, empty until resolved
    pub swc: String,
    /// How this record was produced
    pub evidence: String,
    /// Trust classification
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_names() {
        assert_eq!(RteDirection::Read.name(), "read");
        assert_eq!(RteDirection::IrvRead.name(), "irvread");
        assert_eq!(RteDirection::IrvWrite.name(), "irvwrite");
        assert_eq!(RteDirection::Switch.to_string(), "switch");
    }
}
