//! RTE interface call detection.
//!
//! Finds `Rte_*` API calls by naming convention, decomposes each token
//! into port, data element, and callee on a best-effort basis, and
//! resolves the enclosing caller from the run's function records.

mod detector;
mod types;

pub use detector::{RteCallDetector, UNRESOLVED_CALLER_NOTE};
pub use types::*;
