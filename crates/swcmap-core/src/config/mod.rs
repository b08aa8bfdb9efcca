//! Run configuration.

mod types;

pub use types::*;
