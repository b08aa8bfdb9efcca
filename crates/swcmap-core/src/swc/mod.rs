//! SWC resolution and confidence merging.
//!
//! Resolves a component name per file from path conventions, writes it
//! onto every record, and merges resolution outcomes into record
//! confidence without ever lowering it.

mod merger;
mod resolver;

pub use merger::apply_component_mapping;
pub use resolver::{ComponentResolver, SwcResolution, NO_CANDIDATES_ISSUE};
