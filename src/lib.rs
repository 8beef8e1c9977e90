//! JSONL Inspector - structural and statistical diagnostics for
//! conversation corpora
//!
//! This library analyzes line-delimited JSON files where each line is one
//! multi-turn conversation (an ordered sequence of role-tagged messages).
//! In a single pass it computes:
//!
//! - Per-line validity, with reasons for every malformed line
//! - A turn-count histogram with percentages and proportional bars
//! - Per-role message counts and content-length statistics
//! - A bounded, truncated sample transcript preview
//!
//! Malformed lines never abort a scan; only I/O failures do.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use jsonl_inspector::{AnalysisOptions, analyze_file, render_report};
//!
//! let options = AnalysisOptions::default();
//! let report = analyze_file(Path::new("corpus.jsonl"), &options)?;
//! print!("{}", render_report(&report, "corpus.jsonl"));
//! assert_eq!(report.total_lines, report.valid_count + report.malformed_count());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod report;

// Re-export commonly used types
pub use analysis::aggregator::{CorpusStats, RoleBucket};
pub use analysis::driver::{AnalysisOptions, CorpusReport, analyze_file, analyze_lines};
pub use models::{Conversation, MalformedRecord, Message};
pub use report::render_report;
