use serde_json::Value;

use crate::models::{Conversation, Message, RecordError};

/// Decode one raw line into a JSON value.
///
/// Never panics and never propagates an error past its boundary: every
/// failure becomes a [`RecordError::Decode`] with the parser's description.
/// Whitespace-only lines fail with a distinct reason so they are counted as
/// malformed rather than silently skipped.
pub fn decode_record(raw: &str) -> Result<Value, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RecordError::Decode("empty or invalid JSON".to_string()));
    }

    serde_json::from_str(trimmed)
        .map_err(|e| RecordError::Decode(format!("JSON decode error: {}", e)))
}

/// Check that a decoded value is a message sequence and extract it.
///
/// Only a JSON array is a valid conversation; any other value is a
/// [`RecordError::Shape`]. Array elements that are not objects are dropped
/// without being counted as errors or as messages.
pub fn validate_conversation(value: Value) -> Result<Conversation, RecordError> {
    let Value::Array(elements) = value else {
        return Err(RecordError::Shape("not a list format".to_string()));
    };

    let mut messages = Vec::with_capacity(elements.len());
    for element in elements {
        if !element.is_object() {
            continue;
        }
        // Object elements always deserialize: both fields are lenient and
        // unknown fields are ignored.
        if let Ok(message) = serde_json::from_value::<Message>(element) {
            messages.push(message);
        }
    }

    Ok(Conversation { messages })
}

/// Decode and validate one raw line in a single step.
pub fn parse_record(raw: &str) -> Result<Conversation, RecordError> {
    decode_record(raw).and_then(validate_conversation)
}
