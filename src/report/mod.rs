//! Deterministic text rendering of a finalized [`CorpusReport`].
//!
//! All functions here are pure over the report value: given the same report
//! and source label they produce byte-identical output. Sections appear in
//! a fixed order - corpus totals, validity, message counts, turn
//! distribution, content-length summaries, sample transcripts.

pub mod distribution;
pub mod samples;

use crate::analysis::aggregator::{CorpusStats, RoleBucket};
use crate::analysis::driver::CorpusReport;

/// Malformed-line reasons shown in the rendered report; the rest are
/// summarized as an overflow count.
pub const MALFORMED_DISPLAY_LIMIT: usize = 5;

pub(crate) const SECTION_RULE: &str =
    "============================================================";
pub(crate) const SAMPLE_RULE: &str =
    "------------------------------------------------------------";

/// Render the full report as a single string.
///
/// `source` is the label shown in the header, normally the corpus file
/// path as given on the command line.
pub fn render_report(report: &CorpusReport, source: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(SECTION_RULE.to_string());
    lines.push(format!("  Analyzing file: {}", source));
    lines.push(SECTION_RULE.to_string());
    lines.push(String::new());

    lines.push("Corpus:".to_string());
    lines.push(format!("  Total lines: {}", report.total_lines));
    lines.push(String::new());

    lines.extend(validity_lines(report));
    lines.push(String::new());

    lines.extend(message_count_lines(&report.stats));
    lines.push(String::new());

    lines.extend(distribution::histogram_lines(report));
    lines.push(String::new());

    lines.extend(distribution::length_summary_lines(&report.stats));

    if !report.samples.is_empty() {
        lines.extend(samples::sample_lines(&report.samples));
        lines.push(String::new());
    }

    lines.push(SECTION_RULE.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Valid/invalid counts, with up to [`MALFORMED_DISPLAY_LIMIT`] reasons and
/// an overflow count beyond that.
fn validity_lines(report: &CorpusReport) -> Vec<String> {
    let mut lines = vec![
        "Validity:".to_string(),
        format!("  Valid conversations: {}", report.valid_count),
    ];

    if !report.malformed.is_empty() {
        lines.push(format!("  Invalid lines: {}", report.malformed_count()));
        lines.push("  Invalid line details:".to_string());
        for record in report.malformed.iter().take(MALFORMED_DISPLAY_LIMIT) {
            lines.push(format!("    line {}: {}", record.line_number, record.reason));
        }
        let overflow = report.malformed_count().saturating_sub(MALFORMED_DISPLAY_LIMIT);
        if overflow > 0 {
            lines.push(format!("    ... and {} more errors", overflow));
        }
    }

    lines
}

fn message_count_lines(stats: &CorpusStats) -> Vec<String> {
    vec![
        "Messages:".to_string(),
        format!("  User messages: {}", stats.tally(RoleBucket::User).count()),
        format!("  Assistant messages: {}", stats.tally(RoleBucket::Assistant).count()),
        format!("  Other messages: {}", stats.tally(RoleBucket::Other).count()),
        format!("  Total messages: {}", stats.total_messages()),
    ]
}
