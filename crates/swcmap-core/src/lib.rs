//! swcmap-core: AUTOSAR SWC symbol extraction engine
//!
//! This crate turns a tree of C sources into a component-mapped symbol
//! report:
//! - Scanner: Recursive `.c` collection into a deterministic source map
//! - Preprocess: Newline normalization and comment stripping
//! - Symbols: Function/variable extraction, tree-sitter AST first with a
//!   regex fallback
//! - Rte: RTE interface call detection with caller resolution
//! - Swc: Component inference from paths plus confidence merging
//! - Report: Flattened rows and CSV export
//! - Pipeline: The phase orchestrator producing an annotated `Analysis`

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod preprocess;
pub mod report;
pub mod rte;
pub mod scanner;
pub mod swc;
pub mod symbols;

// Re-exports for convenience
pub use config::{AnalysisConfig, DEFAULT_OUTPUT_CSV};
pub use errors::{ExportError, ScanError};
pub use pipeline::{Analysis, Pipeline, NO_SOURCES_ISSUE};
pub use report::{build_rows, ReportRow, RowKind, COLUMNS};
pub use rte::{RteCallDetector, RteCallRecord, RteDirection};
pub use scanner::{collect_sources, SourceMap};
pub use swc::{ComponentResolver, SwcResolution, NO_CANDIDATES_ISSUE};
pub use symbols::{
    Confidence, ExtractionMode, Extraction, FunctionRecord, StorageClass, VariableRecord,
    FALLBACK_MODE_ISSUE,
};
