//! Fatal error types.
//!
//! Only structural impossibilities are errors: a source root that cannot
//! be read, or an export destination that cannot be written. Everything
//! about extraction accuracy travels as issue strings on the analysis
//! result instead.

use std::path::PathBuf;

/// Errors raised while collecting source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source root does not exist: {path}")]
    MissingRoot { path: PathBuf },

    #[error("Source root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Cannot read source root {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while writing the report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Cannot write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
