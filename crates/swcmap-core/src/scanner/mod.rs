//! Source discovery.
//!
//! Walks a project root, picks up the `.c` translation units, and hands
//! the pipeline a deterministic path-keyed map of their contents.

mod types;
mod walker;

pub use types::SourceMap;
pub use walker::collect_sources;
