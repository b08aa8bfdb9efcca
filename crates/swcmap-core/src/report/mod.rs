//! Report assembly and export.
//!
//! Flattens the run's records into uniform rows and serializes them as
//! CSV. Row order is the report contract: functions, variables, then
//! interface calls, each in extraction order.

mod builder;
mod csv;
mod types;

pub use builder::build_rows;
pub use csv::{export, parse_records, render};
pub use types::{ReportRow, RowKind, COLUMNS};
