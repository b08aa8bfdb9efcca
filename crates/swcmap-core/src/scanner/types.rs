use std::collections::BTreeMap;

/// Source files keyed by path.
///
/// A `BTreeMap` keeps iteration in path order, so every downstream stage
/// sees files in the same order on every run.
pub type SourceMap = BTreeMap<String, String>;
