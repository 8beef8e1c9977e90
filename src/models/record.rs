use std::fmt;

use crate::models::Conversation;

/// Why a line failed to produce a conversation.
///
/// Both variants are recoverable: the scan records them and moves on. Only
/// I/O failures (handled in the driver) abort an analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line is not well-formed JSON text.
    Decode(String),
    /// The line decodes, but not to a sequence of messages.
    Shape(String),
}

impl RecordError {
    /// Human-readable reason, as recorded in the report.
    pub fn reason(&self) -> &str {
        match self {
            RecordError::Decode(reason) | RecordError::Shape(reason) => reason,
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// A line that failed decode or shape validation, retained for reporting.
///
/// Never retried; the report shows the first few with an overflow count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based position of the line in the input file.
    pub line_number: usize,
    pub reason: String,
}

/// A valid conversation captured during the pass for the sample preview,
/// paired with its 1-based position in the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationSample {
    pub line_number: usize,
    pub conversation: Conversation,
}
