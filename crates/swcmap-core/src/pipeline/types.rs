use serde::{Deserialize, Serialize};

use crate::report::ReportRow;
use crate::rte::RteCallRecord;
use crate::symbols::{FunctionRecord, VariableRecord};

/// Everything one pipeline run produced.
///
/// Records carry their final component and confidence; `rows` is the
/// same data flattened into report order. `issues` collects every soft
/// degradation in the order the phases raised it, with the below-high
/// confidence summary always last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Analysis {
    /// Extracted function definitions
    pub functions: Vec<FunctionRecord>,
    /// Extracted variable declarations
    pub variables: Vec<VariableRecord>,
    /// Detected RTE interface calls
    pub rte_calls: Vec<RteCallRecord>,
    /// Sorted, deduplicated component names inferred from paths
    pub swc_candidates: Vec<String>,
    /// Flattened report rows: functions, variables, then calls
    pub rows: Vec<ReportRow>,
    /// Soft degradations accumulated across phases
    pub issues: Vec<String>,
}
