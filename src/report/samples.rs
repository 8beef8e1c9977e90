use crate::models::ConversationSample;

/// Messages shown per sampled conversation.
pub const SAMPLE_MESSAGE_LIMIT: usize = 4;
/// Characters of content shown per message.
pub const SAMPLE_CONTENT_LIMIT: usize = 100;
/// Appended when content is cut at the display limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Bounded transcript preview over the conversations captured during the
/// pass, in original file order.
///
/// Each conversation shows its file ordinal, total turn count, the first
/// [`SAMPLE_MESSAGE_LIMIT`] messages with a role label and truncated
/// content, and a trailing note when the display cap hid messages.
pub fn sample_lines(samples: &[ConversationSample]) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(super::SECTION_RULE.to_string());
    lines.push(format!("  Sample conversations (first {})", samples.len()));
    lines.push(super::SECTION_RULE.to_string());

    for sample in samples {
        lines.push(String::new());
        lines.push(format!(
            "Conversation #{} ({} turns):",
            sample.line_number,
            sample.conversation.turn_count()
        ));
        lines.push(super::SAMPLE_RULE.to_string());

        for message in sample.conversation.messages.iter().take(SAMPLE_MESSAGE_LIMIT) {
            lines.push(format!("  {}:", role_label(&message.role)));
            lines.push(format!("    {}", truncate_content(&message.content)));
        }

        let omitted = sample.conversation.turn_count().saturating_sub(SAMPLE_MESSAGE_LIMIT);
        if omitted > 0 {
            lines.push(format!("  ... {} more messages", omitted));
        }
    }

    lines
}

/// Display label for a role; the empty string (missing role) is shown as a
/// placeholder, aggregation still sees it as `other`.
fn role_label(role: &str) -> &str {
    if role.is_empty() { "(unknown)" } else { role }
}

/// Cut content at the display limit, counting characters rather than bytes,
/// and append the marker only when something was actually cut.
fn truncate_content(content: &str) -> String {
    if content.chars().count() <= SAMPLE_CONTENT_LIMIT {
        return content.to_string();
    }

    let mut truncated: String = content.chars().take(SAMPLE_CONTENT_LIMIT).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
