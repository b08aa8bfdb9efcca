//! Integration tests for the extraction pipeline: scan, analyze, export.

use std::fs;

use swcmap_core::report::{export, parse_records, render};
use swcmap_core::{
    collect_sources, Analysis, AnalysisConfig, Confidence, Pipeline, RowKind, RteDirection,
    SourceMap, COLUMNS, NO_SOURCES_ISSUE,
};

const SENSOR_SOURCE: &str = "\
/* RTE contract implementation */
static SensorState state;

void Sensor_Read(void) {
    Rte_Read_Port1_Value();
}

void Sensor_Publish(void) {
    Rte_Write_OutPort_Speed();
}
";

fn sources_from(entries: &[(&str, &str)]) -> SourceMap {
    let mut sources = SourceMap::new();
    for (path, text) in entries {
        sources.insert(path.to_string(), text.to_string());
    }
    sources
}

fn analyze(entries: &[(&str, &str)]) -> Analysis {
    Pipeline::new(AnalysisConfig::new()).run(&sources_from(entries))
}

fn mixed_tree() -> Analysis {
    analyze(&[
        ("Sensor/Rte_Sensor.c", SENSOR_SOURCE),
        ("loose.c", "int counter = 0;\n"),
    ])
}

// One RTE contract file plus one unmappable loose file, through every phase.
#[test]
fn full_pipeline_over_mixed_tree() {
    let analysis = mixed_tree();

    assert_eq!(analysis.swc_candidates, vec!["Sensor".to_string()]);

    let function_names: Vec<&str> = analysis.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(function_names, vec!["Sensor_Read", "Sensor_Publish"]);
    assert_eq!(analysis.functions[0].line, 4);
    assert_eq!(analysis.functions[1].line, 8);
    assert_eq!(analysis.functions[0].swc, "Sensor");

    let variable_names: Vec<&str> = analysis.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(variable_names, vec!["state", "counter"]);
    assert_eq!(analysis.variables[0].line, 2);
    assert_eq!(analysis.variables[0].var_type, "SensorState");
    assert_eq!(analysis.variables[0].swc, "Sensor");
    assert_eq!(analysis.variables[1].swc, "");

    assert_eq!(analysis.rte_calls.len(), 2);
    let read = &analysis.rte_calls[0];
    assert_eq!(read.api, "Rte_Read_Port1_Value");
    assert_eq!(read.direction, RteDirection::Read);
    assert_eq!(read.line, 5);
    assert_eq!(read.port, "Port1");
    assert_eq!(read.data_element, "Value");
    assert_eq!(read.caller_function, "Sensor_Read");
    assert_eq!(read.confidence, Confidence::High);
    let write = &analysis.rte_calls[1];
    assert_eq!(write.api, "Rte_Write_OutPort_Speed");
    assert_eq!(write.direction, RteDirection::Write);
    assert_eq!(write.line, 9);
    assert_eq!(write.caller_function, "Sensor_Publish");

    assert!(analysis
        .issues
        .iter()
        .any(|issue| issue.contains("could not be deterministically mapped")));
}

// Report rows flatten functions, variables, then calls, keeping file and line.
#[test]
fn report_rows_preserve_order_and_traceability() {
    let analysis = mixed_tree();

    assert_eq!(analysis.rows.len(), 6);
    let kinds: Vec<RowKind> = analysis.rows.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RowKind::Function,
            RowKind::Function,
            RowKind::Variable,
            RowKind::Variable,
            RowKind::RteInterface,
            RowKind::RteInterface,
        ]
    );

    for row in &analysis.rows {
        assert!(row.line >= 1);
        assert!(!row.file.is_empty());
    }
    assert_eq!(analysis.rows[0].name, "Sensor_Read");
    assert_eq!(analysis.rows[0].line, 4);
    assert_eq!(analysis.rows[4].name, "Rte_Read_Port1_Value");
    assert_eq!(analysis.rows[4].line, 5);
}

// Calls hidden inside comments never reach the detector.
#[test]
fn commented_out_calls_are_ignored() {
    let analysis = analyze(&[(
        "Sensor/Rte_Sensor.c",
        "void f(void) {\n    // Rte_Read_Hidden_Value();\n    Rte_Read_Seen_Value();\n}\n",
    )]);

    assert_eq!(analysis.rte_calls.len(), 1);
    assert_eq!(analysis.rte_calls[0].api, "Rte_Read_Seen_Value");
    assert_eq!(analysis.rte_calls[0].line, 3);
}

// With the AST front end active, nothing carries fallback evidence.
#[cfg(feature = "c-ast")]
#[test]
fn ast_mode_keeps_fallback_out_of_evidence() {
    let analysis = mixed_tree();

    for row in &analysis.rows {
        assert!(!row.evidence.contains("regex fallback"), "{}", row.evidence);
    }
    assert!(analysis
        .functions
        .iter()
        .all(|f| f.evidence.starts_with("tree-sitter AST")));
    assert!(!analysis
        .issues
        .iter()
        .any(|issue| issue.contains("fallback")));
}

// Without the AST front end, nothing mentions it and the fallback is flagged.
#[cfg(not(feature = "c-ast"))]
#[test]
fn fallback_mode_keeps_ast_out_of_evidence() {
    use swcmap_core::FALLBACK_MODE_ISSUE;

    let analysis = mixed_tree();

    for row in &analysis.rows {
        assert!(!row.evidence.contains("tree-sitter AST"), "{}", row.evidence);
    }
    assert!(analysis
        .issues
        .iter()
        .any(|issue| issue == FALLBACK_MODE_ISSUE));
}

// The exported text re-parses to exactly the in-memory rows.
#[test]
fn csv_round_trip_matches_rows() {
    let analysis = mixed_tree();

    let text = render(&analysis.rows);
    let records = parse_records(&text);

    assert_eq!(records.len(), analysis.rows.len() + 1);
    assert_eq!(records[0], COLUMNS.map(str::to_string).to_vec());
    for (record, row) in records[1..].iter().zip(&analysis.rows) {
        assert_eq!(record.as_slice(), row.fields().as_slice());
    }
}

// Scan a real directory tree, run the pipeline, export, and read back.
#[test]
fn scan_analyze_export_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let swc_dir = dir.path().join("Sensor");
    fs::create_dir_all(&swc_dir).unwrap();
    fs::write(swc_dir.join("Rte_Sensor.c"), SENSOR_SOURCE).unwrap();
    fs::write(dir.path().join("loose.c"), "int counter = 0;\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored\n").unwrap();

    let sources = collect_sources(dir.path()).unwrap();
    assert_eq!(sources.len(), 2);

    let analysis = Pipeline::new(AnalysisConfig::new()).run(&sources);
    assert_eq!(analysis.rows.len(), 6);
    assert_eq!(analysis.swc_candidates, vec!["Sensor".to_string()]);

    let out = dir.path().join("report.csv");
    export(&analysis.rows, &out).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with('\u{feff}'));
    let records = parse_records(&text);
    assert_eq!(records.len(), analysis.rows.len() + 1);
    assert_eq!(records[0], COLUMNS.map(str::to_string).to_vec());
}

// An empty tree produces an empty report and exactly one issue.
#[test]
fn empty_tree_reports_single_issue() {
    let dir = tempfile::tempdir().unwrap();

    let sources = collect_sources(dir.path()).unwrap();
    let analysis = Pipeline::new(AnalysisConfig::new()).run(&sources);

    assert!(analysis.rows.is_empty());
    assert!(analysis.functions.is_empty());
    assert_eq!(analysis.issues, vec![NO_SOURCES_ISSUE.to_string()]);
}

// Candidate list stays sorted, deduplicated, and free of empty names.
#[test]
fn candidates_are_sorted_and_unique() {
    let analysis = analyze(&[
        ("Zeta/a.c", ""),
        ("Alpha/b.c", ""),
        ("second/Alpha/c.c", ""),
        ("noext.c", ""),
    ]);

    assert_eq!(
        analysis.swc_candidates,
        vec!["Alpha".to_string(), "Zeta".to_string()]
    );
    assert!(analysis.swc_candidates.iter().all(|c| !c.is_empty()));
}
