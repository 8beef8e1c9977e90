//! Single-pass analysis driver.
//!
//! # Error Handling Strategy
//!
//! - **Fatal I/O failures**: the corpus file failing to open or read aborts
//!   the analysis immediately via `anyhow::Result` with context; no partial
//!   report is produced.
//! - **Per-line failures**: decode and shape failures are always recoverable.
//!   They are collected into the report as [`MalformedRecord`]s and never
//!   interrupt the pass, so one corrupted line costs exactly one line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::aggregator::CorpusStats;
use crate::models::{ConversationSample, MalformedRecord};
use crate::parsers::parse_record;

/// Tunables consumed by one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Valid conversations to capture for the sample preview, in file
    /// order; 0 disables the preview.
    pub sample_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { sample_count: 3 }
    }
}

/// Final output of one analysis pass over a corpus.
///
/// `total_lines == valid_count + malformed.len()` holds at all times.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    pub total_lines: usize,
    pub valid_count: usize,
    pub malformed: Vec<MalformedRecord>,
    pub stats: CorpusStats,
    pub samples: Vec<ConversationSample>,
}

impl CorpusReport {
    /// Overall outcome of the analysis: true iff at least one line held a
    /// valid conversation. This is the sole boolean the CLI maps to an
    /// exit code.
    pub fn is_success(&self) -> bool {
        self.valid_count > 0
    }

    pub fn malformed_count(&self) -> usize {
        self.malformed.len()
    }
}

/// Analyze a JSONL corpus file.
///
/// The whole file is read up front, so memory scales with file size.
/// Open/read failures abort with context and produce no report; everything
/// after the read is infallible.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use jsonl_inspector::{AnalysisOptions, analyze_file};
///
/// let report = analyze_file(Path::new("corpus.jsonl"), &AnalysisOptions::default())?;
/// println!("{} of {} lines valid", report.valid_count, report.total_lines);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn analyze_file(path: &Path, options: &AnalysisOptions) -> Result<CorpusReport> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;

    Ok(analyze_lines(contents.lines(), options))
}

/// Analyze an in-memory sequence of raw lines in file order.
///
/// Each line runs through decode → validate exactly once; valid
/// conversations feed the aggregator, failures are collected with their
/// 1-based line number. The first `sample_count` valid conversations are
/// captured for the preview, so the sample renderer never re-decodes lines.
pub fn analyze_lines<'a, I>(lines: I, options: &AnalysisOptions) -> CorpusReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = CorpusStats::new();
    let mut malformed = Vec::new();
    let mut samples = Vec::new();
    let mut total_lines = 0;
    let mut valid_count = 0;

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        total_lines += 1;

        match parse_record(raw) {
            Ok(conversation) => {
                valid_count += 1;
                stats.observe(&conversation);
                if samples.len() < options.sample_count {
                    samples.push(ConversationSample { line_number, conversation });
                }
            }
            Err(error) => {
                malformed
                    .push(MalformedRecord { line_number, reason: error.reason().to_string() });
            }
        }
    }

    CorpusReport { total_lines, valid_count, malformed, stats, samples }
}
