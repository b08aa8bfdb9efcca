//! End-to-end analysis pipeline.
//!
//! Ties preprocessing, extraction, interface detection, component
//! mapping, and report assembly into one deterministic run.

mod analyzer;
mod types;

pub use analyzer::{Pipeline, NO_SOURCES_ISSUE};
pub use types::Analysis;
