use crate::access_log::{AnalyzeError, analyze_file};
use crate::logging::LogFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the access log to analyze
    pub path: PathBuf,

    /// Diagnostics format (default: pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log debug diagnostics, including line totals for the run
    #[arg(long)]
    pub debug: bool,
}

/// Analyzes the log and prints the report to stdout.
///
/// Nothing is printed when the run fails.
pub fn run(args: &AnalyzeArgs) -> Result<(), AnalyzeError> {
    let analysis = analyze_file(&args.path)?;
    let json = analysis.report.to_json_pretty()?;

    println!("{json}");
    Ok(())
}
