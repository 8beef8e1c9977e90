//! Line-level decoding and shape validation for JSONL conversation corpora
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Individual line failures**: A line that is not valid JSON, or that decodes to
//!   something other than a message list, produces a [`RecordError`] that the caller
//!   records and moves past. A single bad line never aborts a corpus scan.
//!
//! - **Individual message failures**: Inside a valid conversation list, elements that
//!   are not JSON objects are dropped silently - counted neither as errors nor as
//!   messages. This is a deliberately lossy policy, not a bug.
//!
//! - **Error propagation**: Recoverable per-line conditions are plain data
//!   ([`RecordError`]), never `anyhow` errors; only the driver's I/O boundary uses
//!   `anyhow::Result`. Consumers read reason strings, they don't match error types.
//!
//! [`RecordError`]: crate::models::RecordError

pub mod deserializers;
pub mod record;

pub use record::{decode_record, parse_record, validate_conversation};
