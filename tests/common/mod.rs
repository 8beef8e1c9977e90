//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

/// Builder for JSONL corpus files used across the integration tests
pub struct CorpusFileBuilder {
    lines: Vec<String>,
}

impl CorpusFileBuilder {
    /// Create a builder with no lines
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one raw line verbatim (may be intentionally malformed)
    pub fn with_raw_line(mut self, raw: &str) -> Self {
        self.lines.push(raw.to_string());
        self
    }

    /// Append a well-formed conversation line from (role, content) pairs
    pub fn with_conversation(mut self, turns: &[(&str, &str)]) -> Self {
        let messages: Vec<serde_json::Value> =
            turns.iter().map(|(role, content)| json!({"role": role, "content": content})).collect();
        self.lines.push(serde_json::Value::Array(messages).to_string());
        self
    }

    /// Append a simple user/assistant exchange with the given contents
    pub fn with_exchange(self, user_content: &str, assistant_content: &str) -> Self {
        self.with_conversation(&[("user", user_content), ("assistant", assistant_content)])
    }

    /// Write all lines to a temp file, newline-terminated
    pub fn write(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        for line in &self.lines {
            writeln!(file, "{}", line).expect("Failed to write corpus line");
        }
        file.flush().expect("Failed to flush corpus file");
        file
    }

    /// Write all lines joined with the given separator, no trailing newline
    pub fn write_with_separator(self, separator: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(self.lines.join(separator).as_bytes())
            .expect("Failed to write corpus file");
        file.flush().expect("Failed to flush corpus file");
        file
    }
}

impl Default for CorpusFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
