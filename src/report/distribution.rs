use crate::analysis::aggregator::{CorpusStats, RoleBucket};
use crate::analysis::driver::CorpusReport;

/// Turn-count histogram rows in ascending turn-count order.
///
/// Each row shows the absolute count, its percentage of the total line
/// count rounded to one decimal place, and a proportional bar of one block
/// per two percentage points. When no line held a valid conversation the
/// rows are replaced by an explicit zero-state line and no percentage
/// arithmetic runs at all.
pub fn histogram_lines(report: &CorpusReport) -> Vec<String> {
    let mut lines = vec!["Turn distribution:".to_string()];

    if report.valid_count == 0 {
        lines.push("  No valid conversations.".to_string());
        return lines;
    }

    for (&turns, &count) in report.stats.turn_histogram() {
        let percentage = rounded_percentage(count, report.total_lines);
        lines.push(format!(
            "  {:2} turns: {:3} ({:5.1}%) {}",
            turns,
            count,
            percentage,
            bar(percentage)
        ));
    }

    lines
}

/// Per-role content-length summaries; a role with no observed messages is
/// omitted entirely.
pub fn length_summary_lines(stats: &CorpusStats) -> Vec<String> {
    let mut lines = Vec::new();

    let roles = [
        ("User", RoleBucket::User),
        ("Assistant", RoleBucket::Assistant),
        ("Other", RoleBucket::Other),
    ];
    for (label, bucket) in roles {
        let Some(summary) = stats.tally(bucket).summary() else {
            continue;
        };
        lines.push(format!("{} message length (chars):", label));
        lines.push(format!("  Mean: {:.1}", summary.mean));
        lines.push(format!("  Min: {}", summary.min));
        lines.push(format!("  Max: {}", summary.max));
        lines.push(String::new());
    }

    lines
}

/// Percentage of total lines, rounded to one decimal place.
fn rounded_percentage(count: usize, total_lines: usize) -> f64 {
    let raw = (count as f64 / total_lines as f64) * 100.0;
    (raw * 10.0).round() / 10.0
}

/// One block per two percentage points, floored; derived from the already
/// rounded percentage so the bar is deterministic given the displayed value.
fn bar(percentage: f64) -> String {
    "█".repeat((percentage / 2.0).floor() as usize)
}
