// Command-line entry point for swcmap.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use swcmap_core::report::export;
use swcmap_core::{collect_sources, AnalysisConfig, Pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about = "AUTOSAR SWC symbol extraction", long_about = None)]
struct Cli {
    /// Root directory to scan for C sources
    #[arg(long)]
    root: PathBuf,

    /// Report destination (defaults to autosar_swc_extract.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Echo every recorded issue after the summary
    #[arg(long)]
    print_issues: bool,

    /// Include search path for the C front end
    #[arg(short = 'I', long = "include-dir", value_name = "DIR")]
    include_dirs: Vec<PathBuf>,

    /// Macro definition, NAME or NAME=VALUE
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    defines: Vec<String>,

    /// Extra front-end flag, recorded verbatim
    #[arg(long = "extra-flag", value_name = "FLAG", allow_hyphen_values = true)]
    extra_flags: Vec<String>,

    /// Emit the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn parse_defines(raw: &[String]) -> BTreeMap<String, String> {
    raw.iter()
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) => (name.to_string(), value.to_string()),
            None => (entry.clone(), String::new()),
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AnalysisConfig {
        output_csv: cli.output,
        print_issues: cli.print_issues,
        include_dirs: cli.include_dirs,
        defines: parse_defines(&cli.defines),
        extra_flags: cli.extra_flags,
    };

    let sources = collect_sources(&cli.root)?;
    if sources.is_empty() {
        tracing::warn!("no .c files found under {}", cli.root.display());
    }

    let pipeline = Pipeline::new(config);
    let analysis = pipeline.run(&sources);

    let out = pipeline.config().output_path().to_path_buf();
    export(&analysis.rows, &out)?;

    if cli.json {
        let summary = json!({
            "success": true,
            "csv_path": out.display().to_string(),
            "total_files": sources.len(),
            "total_functions": analysis.functions.len(),
            "total_variables": analysis.variables.len(),
            "total_rte_interfaces": analysis.rte_calls.len(),
            "swc_candidates": analysis.swc_candidates,
            "issues": analysis.issues,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Analyzed {} file(s)", sources.len());
        println!("  functions:      {}", analysis.functions.len());
        println!("  variables:      {}", analysis.variables.len());
        println!("  rte interfaces: {}", analysis.rte_calls.len());
        println!("  swc candidates: {}", analysis.swc_candidates.join(", "));
        println!("Report written to {}", out.display());

        if pipeline.config().print_issues && !analysis.issues.is_empty() {
            println!();
            println!("Issues ({}):", analysis.issues.len());
            for issue in &analysis.issues {
                println!("  - {}", issue);
            }
        }
    }

    Ok(())
}
