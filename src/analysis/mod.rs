//! Single-pass corpus analysis: streaming statistics and the driver that
//! sequences decode → validate → aggregate over a file.

pub mod aggregator;
pub mod driver;

pub use aggregator::{CorpusStats, LengthSummary, RoleBucket};
pub use driver::{AnalysisOptions, CorpusReport, analyze_file, analyze_lines};
