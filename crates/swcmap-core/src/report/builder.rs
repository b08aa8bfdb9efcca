//! Report assembly.

use crate::rte::RteCallRecord;
use crate::symbols::{FunctionRecord, VariableRecord};
use super::types::{ReportRow, RowKind};

/// Flatten records into rows: functions, then variables, then
/// interface calls, each in extraction order.
pub fn build_rows(
    functions: &[FunctionRecord],
    variables: &[VariableRecord],
    calls: &[RteCallRecord],
) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(functions.len() + variables.len() + calls.len());

    for f in functions {
        rows.push(ReportRow {
            swc: f.swc.clone(),
            kind: RowKind::Function,
            name: f.name.clone(),
            signature: f.signature.clone(),
            scope: f.storage.name().to_string(),
            file: f.file.clone(),
            line: f.line,
            direction: String::new(),
            port: String::new(),
            data_element: String::new(),
            callee: String::new(),
            caller_function: String::new(),
            confidence: f.confidence,
            evidence: f.evidence.clone(),
        });
    }

    for v in variables {
        rows.push(ReportRow {
            swc: v.swc.clone(),
            kind: RowKind::Variable,
            name: v.name.clone(),
            signature: v.var_type.clone(),
            scope: v.storage.name().to_string(),
            file: v.file.clone(),
            line: v.line,
            direction: String::new(),
            port: String::new(),
            data_element: String::new(),
            callee: String::new(),
            caller_function: String::new(),
            confidence: v.confidence,
            evidence: v.evidence.clone(),
        });
    }

    for c in calls {
        rows.push(ReportRow {
            swc: c.swc.clone(),
            kind: RowKind::RteInterface,
            name: c.api.clone(),
            signature: String::new(),
            scope: String::new(),
            file: c.file.clone(),
            line: c.line,
            direction: c.direction.name().to_string(),
            port: c.port.clone(),
            data_element: c.data_element.clone(),
            callee: c.callee.clone(),
            caller_function: c.caller_function.clone(),
            confidence: c.confidence,
            evidence: c.evidence.clone(),
        });
    }

    rows
}
