//! Pipeline orchestrator.
//!
//! Phase 1: Preprocess → Phase 2: Component candidates → Phase 3: Symbol
//! extraction → Phase 4: Interface detection → Phase 5: Component mapping
//! and confidence merge → Phase 6: Report rows.

use tracing::debug;

use crate::config::AnalysisConfig;
use crate::preprocess::preprocess_source;
use crate::report::build_rows;
use crate::rte::RteCallDetector;
use crate::scanner::SourceMap;
use crate::swc::{apply_component_mapping, ComponentResolver, NO_CANDIDATES_ISSUE};
use crate::symbols;

use super::Analysis;

pub const NO_SOURCES_ISSUE: &str = "No C source files found; nothing to analyze";

/// Runs the extraction phases over one set of sources.
pub struct Pipeline {
    config: AnalysisConfig,
}

impl Pipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run every phase and return the annotated result.
    ///
    /// Soft problems land on `Analysis::issues`; the run itself cannot
    /// fail. An empty source set short-circuits to an empty result
    /// carrying a single issue.
    pub fn run(&self, sources: &SourceMap) -> Analysis {
        let mut analysis = Analysis::default();

        if sources.is_empty() {
            analysis.issues.push(NO_SOURCES_ISSUE.to_string());
            return analysis;
        }

        // Phase 1: Preprocess.
        let preprocessed: SourceMap = sources
            .iter()
            .map(|(path, text)| (path.clone(), preprocess_source(text)))
            .collect();
        debug!(files = preprocessed.len(), "Phase 1: preprocessed sources");

        // Phase 2: Component candidates.
        let resolver = ComponentResolver::new();
        analysis.swc_candidates = resolver.collect_candidates(&preprocessed);
        if analysis.swc_candidates.is_empty() {
            analysis.issues.push(NO_CANDIDATES_ISSUE.to_string());
        }
        debug!(
            candidates = analysis.swc_candidates.len(),
            "Phase 2: collected SWC candidates"
        );

        // Phase 3: Symbol extraction.
        let extraction = symbols::extract(&preprocessed, &self.config, &mut analysis.issues);
        debug!(
            mode = extraction.mode.name(),
            functions = extraction.functions.len(),
            variables = extraction.variables.len(),
            "Phase 3: extracted symbols"
        );
        analysis.functions = extraction.functions;
        analysis.variables = extraction.variables;

        // Phase 4: Interface detection.
        let detector = RteCallDetector::new();
        analysis.rte_calls = detector.detect(&preprocessed, &analysis.functions);
        debug!(
            calls = analysis.rte_calls.len(),
            "Phase 4: detected RTE interface calls"
        );

        // Phase 5: Component mapping and confidence merge.
        apply_component_mapping(
            &resolver,
            &mut analysis.functions,
            &mut analysis.variables,
            &mut analysis.rte_calls,
            &mut analysis.issues,
        );

        // Phase 6: Report rows.
        analysis.rows = build_rows(&analysis.functions, &analysis.variables, &analysis.rte_calls);
        debug!(
            rows = analysis.rows.len(),
            issues = analysis.issues.len(),
            "Pipeline complete"
        );

        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RowKind;
    use crate::rte::RteDirection;
    use crate::symbols::Confidence;

    fn run(entries: &[(&str, &str)]) -> Analysis {
        let mut sources = SourceMap::new();
        for (path, text) in entries {
            sources.insert(path.to_string(), text.to_string());
        }
        Pipeline::new(AnalysisConfig::new()).run(&sources)
    }

    #[test]
    fn test_empty_sources_short_circuit() {
        let analysis = run(&[]);

        assert!(analysis.functions.is_empty());
        assert!(analysis.variables.is_empty());
        assert!(analysis.rte_calls.is_empty());
        assert!(analysis.rows.is_empty());
        assert_eq!(analysis.issues, vec![NO_SOURCES_ISSUE.to_string()]);
    }

    #[test]
    fn test_sensor_file_end_to_end() {
        let analysis = run(&[(
            "Rte_Sensor.c",
            "void Read(void) { Rte_Read_Port1_Value(); }\n",
        )]);

        assert_eq!(analysis.swc_candidates, vec!["Sensor".to_string()]);

        assert_eq!(analysis.functions.len(), 1);
        let function = &analysis.functions[0];
        assert_eq!(function.name, "Read");
        assert_eq!(function.line, 1);
        assert_eq!(function.swc, "Sensor");

        assert_eq!(analysis.rte_calls.len(), 1);
        let call = &analysis.rte_calls[0];
        assert_eq!(call.api, "Rte_Read_Port1_Value");
        assert_eq!(call.direction, RteDirection::Read);
        assert_eq!(call.port, "Port1");
        assert_eq!(call.data_element, "Value");
        assert_eq!(call.caller_function, "Read");
        assert_eq!(call.confidence, Confidence::High);
        assert_eq!(call.swc, "Sensor");

        let total =
            analysis.functions.len() + analysis.variables.len() + analysis.rte_calls.len();
        assert_eq!(analysis.rows.len(), total);
        assert_eq!(analysis.rows[0].kind, RowKind::Function);
        assert_eq!(analysis.rows.last().unwrap().kind, RowKind::RteInterface);
    }

    #[cfg(feature = "c-ast")]
    #[test]
    fn test_clean_ast_run_reports_no_issues() {
        let analysis = run(&[(
            "Rte_Sensor.c",
            "void Read(void) { Rte_Read_Port1_Value(); }\n",
        )]);
        assert!(analysis.issues.is_empty(), "issues: {:?}", analysis.issues);
    }

    #[test]
    fn test_issue_order_candidates_first_quality_last() {
        let analysis = run(&[("main.c", "Rte_Write_P_V();\n")]);

        assert_eq!(
            analysis.issues.first().map(String::as_str),
            Some(NO_CANDIDATES_ISSUE)
        );
        assert!(analysis
            .issues
            .last()
            .map_or(false, |issue| issue.contains("below high confidence")));
    }

    #[test]
    fn test_unmapped_symbols_are_counted() {
        let analysis = run(&[("main.c", "int counter = 0;\n")]);

        assert_eq!(analysis.variables.len(), 1);
        assert!(analysis.variables[0].swc.is_empty());
        assert!(analysis
            .issues
            .iter()
            .any(|issue| issue.contains("could not be deterministically mapped")));
    }
}
