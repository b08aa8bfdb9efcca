//! Symbol extraction strategies.
//!
//! Exactly one strategy runs per pipeline invocation: the tree-sitter
//! front end when it is available and parses every chosen file, the
//! regex fallback otherwise. Records from the two strategies never mix
//! within a run, so evidence strings always name a single method.

mod pattern;
mod types;

#[cfg(feature = "c-ast")]
mod ast;

pub use pattern::{PatternExtractor, FUNCTION_EVIDENCE, VARIABLE_EVIDENCE};
pub use types::*;

#[cfg(feature = "c-ast")]
pub use ast::{CAstExtractor, FileSymbols, AST_EVIDENCE};

use crate::config::AnalysisConfig;
use crate::scanner::SourceMap;

pub const FALLBACK_MODE_ISSUE: &str = "Symbol extraction ran in regex fallback mode; accuracy is not guaranteed under macros, headers, and conditional compilation";

/// Which strategy produced a run's symbol records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Ast,
    PatternFallback,
}

impl ExtractionMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ast => "ast",
            Self::PatternFallback => "pattern-fallback",
        }
    }
}

/// Symbol records from one run, all produced by the same strategy.
#[derive(Debug)]
pub struct Extraction {
    pub functions: Vec<FunctionRecord>,
    pub variables: Vec<VariableRecord>,
    pub mode: ExtractionMode,
}

/// Collapse any whitespace run to a single space and trim the ends.
pub(crate) fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract symbols from preprocessed sources, choosing the strategy
/// once for the whole run.
pub fn extract(
    sources: &SourceMap,
    config: &AnalysisConfig,
    issues: &mut Vec<String>,
) -> Extraction {
    if let Some(extraction) = try_extract_with_ast(sources, config, issues) {
        return extraction;
    }
    extract_with_patterns(sources, issues)
}

/// AST strategy. Files ending in `.c` are chosen when any exist,
/// otherwise every file. A file the parser refuses aborts the whole
/// strategy; diagnostics recorded before that point are kept.
#[cfg(feature = "c-ast")]
fn try_extract_with_ast(
    sources: &SourceMap,
    config: &AnalysisConfig,
    issues: &mut Vec<String>,
) -> Option<Extraction> {
    let mut extractor = match CAstExtractor::new() {
        Ok(extractor) => extractor,
        Err(e) => {
            tracing::debug!("C front end unavailable: {e}");
            return None;
        }
    };

    let has_c = sources.keys().any(|p| p.ends_with(".c"));
    let mut functions = Vec::new();
    let mut variables = Vec::new();

    for (path, source) in sources {
        if has_c && !path.ends_with(".c") {
            continue;
        }

        match extractor.extract_file(source, path) {
            Some(file_symbols) => {
                issues.extend(file_symbols.diagnostics);
                functions.extend(file_symbols.functions);
                variables.extend(file_symbols.variables);
            }
            None => {
                tracing::debug!("C front end produced no tree for {path}");
                issues.push(format!(
                    "C front end failed to parse {}; falling back to pattern extraction",
                    path
                ));
                return None;
            }
        }
    }

    if config.has_front_end_config() {
        issues.push(
            "Include dirs, defines, and extra flags are not applied by the bundled C parser; sources were parsed as-is"
                .to_string(),
        );
    }

    Some(Extraction {
        functions,
        variables,
        mode: ExtractionMode::Ast,
    })
}

#[cfg(not(feature = "c-ast"))]
fn try_extract_with_ast(
    _sources: &SourceMap,
    _config: &AnalysisConfig,
    _issues: &mut Vec<String>,
) -> Option<Extraction> {
    None
}

fn extract_with_patterns(sources: &SourceMap, issues: &mut Vec<String>) -> Extraction {
    let extractor = PatternExtractor::new();
    let mut functions = Vec::new();
    let mut variables = Vec::new();

    for (path, source) in sources {
        functions.extend(extractor.extract_functions(source, path));
        variables.extend(extractor.extract_variables(source, path));
    }

    issues.push(FALLBACK_MODE_ISSUE.to_string());

    Extraction {
        functions,
        variables,
        mode: ExtractionMode::PatternFallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sources(entries: &[(&str, &str)]) -> SourceMap {
        entries
            .iter()
            .map(|(path, text)| (path.to_string(), text.to_string()))
            .collect()
    }

    #[cfg(feature = "c-ast")]
    #[test]
    fn test_ast_strategy_is_preferred() {
        let sources = make_sources(&[
            ("a.c", "int first(void) { return 1; }\n"),
            ("b.c", "int second(void) { return 2; }\n"),
        ]);
        let mut issues = Vec::new();

        let extraction = extract(&sources, &AnalysisConfig::new(), &mut issues);

        assert_eq!(extraction.mode, ExtractionMode::Ast);
        assert_eq!(extraction.functions.len(), 2);
        assert!(extraction
            .functions
            .iter()
            .all(|f| f.evidence == AST_EVIDENCE));
        assert!(!issues.iter().any(|i| i == FALLBACK_MODE_ISSUE));
    }

    #[cfg(feature = "c-ast")]
    #[test]
    fn test_ast_strategy_prefers_c_files() {
        let sources = make_sources(&[
            ("main.c", "int main(void) { return 0; }\n"),
            ("notes.txt", "int hidden(void) { return 9; }\n"),
        ]);
        let mut issues = Vec::new();

        let extraction = extract(&sources, &AnalysisConfig::new(), &mut issues);

        assert_eq!(extraction.functions.len(), 1);
        assert_eq!(extraction.functions[0].name, "main");
    }

    #[cfg(feature = "c-ast")]
    #[test]
    fn test_ast_strategy_parses_all_files_without_c_suffix() {
        let sources = make_sources(&[("module.src", "int f(void) { return 0; }\n")]);
        let mut issues = Vec::new();

        let extraction = extract(&sources, &AnalysisConfig::new(), &mut issues);

        assert_eq!(extraction.mode, ExtractionMode::Ast);
        assert_eq!(extraction.functions.len(), 1);
    }

    #[cfg(feature = "c-ast")]
    #[test]
    fn test_front_end_config_is_surfaced() {
        let sources = make_sources(&[("a.c", "int f(void) { return 0; }\n")]);
        let mut config = AnalysisConfig::new();
        config.defines.insert("UNIT_TEST".to_string(), "1".to_string());
        let mut issues = Vec::new();

        extract(&sources, &config, &mut issues);

        assert!(issues.iter().any(|i| i.contains("parsed as-is")));
    }

    #[cfg(not(feature = "c-ast"))]
    #[test]
    fn test_fallback_strategy_without_front_end() {
        let sources = make_sources(&[("a.c", "int first(void) { return 1; }\n")]);
        let mut issues = Vec::new();

        let extraction = extract(&sources, &AnalysisConfig::new(), &mut issues);

        assert_eq!(extraction.mode, ExtractionMode::PatternFallback);
        assert_eq!(extraction.functions.len(), 1);
        assert_eq!(extraction.functions[0].evidence, FUNCTION_EVIDENCE);
        assert!(issues.iter().any(|i| i == FALLBACK_MODE_ISSUE));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ExtractionMode::Ast.name(), "ast");
        assert_eq!(ExtractionMode::PatternFallback.name(), "pattern-fallback");
    }
}
