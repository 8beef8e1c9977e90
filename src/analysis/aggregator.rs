use std::collections::BTreeMap;

use crate::models::Conversation;

/// Role buckets tracked by the aggregator.
///
/// Anything that is not exactly `user` or `assistant` - including the empty
/// default for a missing role - lands in `Other`, so no message goes
/// uncounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleBucket {
    User,
    Assistant,
    Other,
}

impl RoleBucket {
    pub fn classify(role: &str) -> Self {
        match role {
            "user" => RoleBucket::User,
            "assistant" => RoleBucket::Assistant,
            _ => RoleBucket::Other,
        }
    }
}

/// Summary statistics over one role's content-length samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSummary {
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

/// Per-role tally: content lengths in encounter order.
///
/// The message count for a role is the number of recorded samples, so the
/// two can never disagree.
#[derive(Debug, Clone, Default)]
pub struct RoleTally {
    lengths: Vec<usize>,
}

impl RoleTally {
    pub fn record(&mut self, content_chars: usize) {
        self.lengths.push(content_chars);
    }

    pub fn count(&self) -> usize {
        self.lengths.len()
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Mean/min/max of the recorded lengths; `None` when this role saw no
    /// messages, so callers can omit it instead of dividing by zero.
    pub fn summary(&self) -> Option<LengthSummary> {
        let min = *self.lengths.iter().min()?;
        let max = *self.lengths.iter().max()?;
        let sum: usize = self.lengths.iter().sum();
        let mean = sum as f64 / self.lengths.len() as f64;
        Some(LengthSummary { mean, min, max })
    }
}

/// Streaming corpus statistics, updated once per valid conversation.
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    turn_histogram: BTreeMap<usize, usize>,
    user: RoleTally,
    assistant: RoleTally,
    other: RoleTally,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one valid conversation into the running totals.
    ///
    /// Strictly additive: nothing recorded here is ever revised. Content
    /// lengths count Unicode scalar values, matching the character-count
    /// contract used for display truncation.
    pub fn observe(&mut self, conversation: &Conversation) {
        *self.turn_histogram.entry(conversation.turn_count()).or_insert(0) += 1;

        for message in &conversation.messages {
            let bucket = RoleBucket::classify(&message.role);
            self.tally_mut(bucket).record(message.content_chars());
        }
    }

    /// Turn-count histogram, iterated in ascending turn-count order.
    pub fn turn_histogram(&self) -> &BTreeMap<usize, usize> {
        &self.turn_histogram
    }

    pub fn tally(&self, bucket: RoleBucket) -> &RoleTally {
        match bucket {
            RoleBucket::User => &self.user,
            RoleBucket::Assistant => &self.assistant,
            RoleBucket::Other => &self.other,
        }
    }

    fn tally_mut(&mut self, bucket: RoleBucket) -> &mut RoleTally {
        match bucket {
            RoleBucket::User => &mut self.user,
            RoleBucket::Assistant => &mut self.assistant,
            RoleBucket::Other => &mut self.other,
        }
    }

    /// Total messages observed across all role buckets.
    pub fn total_messages(&self) -> usize {
        self.user.count() + self.assistant.count() + self.other.count()
    }

    /// Sum of all histogram buckets, i.e. the number of observed
    /// conversations.
    pub fn observed_conversations(&self) -> usize {
        self.turn_histogram.values().sum()
    }
}
