use serde::Deserialize;

/// A single role-tagged message within a conversation.
///
/// Both fields tolerate absence and non-string JSON values, defaulting to
/// the empty string, so one odd message never invalidates its whole line.
/// Extra fields on the JSON object are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient_string")]
    pub content: String,
}

impl Message {
    /// Content length in Unicode scalar values, not bytes.
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// One decoded line of the corpus: an ordered multi-turn dialogue.
///
/// Message order is turn order and is preserved exactly as decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Number of turns, which is the number of messages.
    pub fn turn_count(&self) -> usize {
        self.messages.len()
    }
}
