//! Analysis configuration types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Report filename used when no destination is configured.
pub const DEFAULT_OUTPUT_CSV: &str = "autosar_swc_extract.csv";

/// Configuration for a single pipeline run.
///
/// Every run owns its own config; nothing here is process-wide. The
/// preprocessor-related fields (`include_dirs`, `defines`, `extra_flags`)
/// describe the build context of the sources. The bundled C front end
/// parses text as-is and cannot apply them, which the pipeline surfaces
/// as an issue when any are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Report destination. `None` means [`DEFAULT_OUTPUT_CSV`] in the
    /// current directory.
    pub output_csv: Option<PathBuf>,
    /// Ask the caller-facing surface to echo the issue list.
    pub print_issues: bool,
    /// Include directories the sources were compiled with.
    pub include_dirs: Vec<PathBuf>,
    /// Preprocessor defines, name to value. An empty value is a bare define.
    pub defines: BTreeMap<String, String>,
    /// Additional compiler flags.
    pub extra_flags: Vec<String>,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective report destination.
    pub fn output_path(&self) -> &Path {
        self.output_csv
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_CSV))
    }

    /// Whether any front-end configuration is set that a syntax-only
    /// parser cannot honor.
    pub fn has_front_end_config(&self) -> bool {
        !self.include_dirs.is_empty() || !self.defines.is_empty() || !self.extra_flags.is_empty()
    }
}
