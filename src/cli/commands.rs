use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::analysis::driver::{AnalysisOptions, analyze_file};
use crate::report::render_report;

#[derive(Parser)]
#[command(name = "jsonl-inspector")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and analyze JSONL conversation corpora", long_about = None)]
pub struct Cli {
    /// Path to the JSONL corpus file
    pub file: PathBuf,

    /// Skip the sample conversation section
    #[arg(long)]
    pub no_samples: bool,

    /// Number of sample conversations to show
    #[arg(long, default_value_t = 3)]
    pub num_samples: usize,
}

impl Cli {
    /// Sample budget implied by the flags; `--no-samples` wins.
    pub fn sample_count(&self) -> usize {
        if self.no_samples { 0 } else { self.num_samples }
    }
}

/// Parse arguments, run the analysis, print the report to stdout.
///
/// Returns the overall success predicate: true iff at least one line held a
/// valid conversation. Fatal I/O errors propagate to the caller.
pub fn run() -> Result<bool> {
    let cli = Cli::parse();

    let options = AnalysisOptions { sample_count: cli.sample_count() };
    let report = analyze_file(&cli.file, &options)?;

    print!("{}", render_report(&report, &cli.file.display().to_string()));

    Ok(report.is_success())
}
