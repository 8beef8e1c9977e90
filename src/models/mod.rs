//! Data models for JSONL conversation corpora.
//!
//! This module defines the data structures used throughout the crate:
//!
//! - [`Message`] - One role-tagged message within a conversation
//! - [`Conversation`] - An ordered multi-turn dialogue decoded from one line
//! - [`RecordError`] - Why a line failed to produce a conversation
//! - [`MalformedRecord`] - A failed line retained for reporting
//! - [`ConversationSample`] - A valid conversation captured for the preview
//!
//! `Message` uses serde for JSON deserialization with a lenient field
//! deserializer (in `parsers::deserializers`) so that missing or non-string
//! `role`/`content` values default to the empty string.

pub mod conversation;
pub mod record;

pub use conversation::{Conversation, Message};
pub use record::{ConversationSample, MalformedRecord, RecordError};
