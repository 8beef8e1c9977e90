/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::CorpusFileBuilder;
use predicates::prelude::*;

fn inspector() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jsonl-inspector"))
}

#[test]
fn test_cli_analyzes_valid_corpus() {
    let file = CorpusFileBuilder::new()
        .with_exchange("Hello", "Hi! How can I help?")
        .with_exchange("What is 2+2?", "4")
        .write();

    inspector()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing file:"))
        .stdout(predicate::str::contains("Total lines: 2"))
        .stdout(predicate::str::contains("Valid conversations: 2"))
        .stdout(predicate::str::contains("User messages: 2"))
        .stdout(predicate::str::contains("Assistant messages: 2"))
        .stdout(predicate::str::contains("Total messages: 4"));
}

#[test]
fn test_cli_reports_invalid_lines_but_still_succeeds() {
    let file = CorpusFileBuilder::new()
        .with_exchange("Hello", "Hi")
        .with_raw_line("this is not json")
        .write();

    inspector()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid lines: 1"))
        .stdout(predicate::str::contains("line 2: JSON decode error:"));
}

#[test]
fn test_cli_fails_when_no_line_is_valid() {
    let file = CorpusFileBuilder::new()
        .with_raw_line("broken")
        .with_raw_line(r#"{"role":"user","content":"object, not list"}"#)
        .with_raw_line("[1, 2")
        .write();

    inspector()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("No valid conversations."));
}

#[test]
fn test_cli_fails_on_missing_file() {
    inspector()
        .arg("/nonexistent/corpus.jsonl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read corpus file"));
}

#[test]
fn test_cli_no_samples_flag_hides_sample_section() {
    let file = CorpusFileBuilder::new().with_exchange("Hello", "Hi").write();

    inspector()
        .arg(file.path())
        .arg("--no-samples")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample conversations").not());
}

#[test]
fn test_cli_num_samples_limits_preview() {
    let file = CorpusFileBuilder::new()
        .with_exchange("one", "1")
        .with_exchange("two", "2")
        .with_exchange("three", "3")
        .write();

    inspector()
        .arg(file.path())
        .args(["--num-samples", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample conversations (first 1)"))
        .stdout(predicate::str::contains("Conversation #1"))
        .stdout(predicate::str::contains("Conversation #2").not());
}

#[test]
fn test_cli_shows_turn_distribution() {
    let file = CorpusFileBuilder::new()
        .with_exchange("Hello", "Hi")
        .with_conversation(&[("user", "single turn")])
        .write();

    inspector()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Turn distribution:"))
        .stdout(predicate::str::contains("1 turns:"))
        .stdout(predicate::str::contains("2 turns:"));
}

#[test]
fn test_cli_help_flag() {
    inspector()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect and analyze JSONL conversation corpora"))
        .stdout(predicate::str::contains("--no-samples"))
        .stdout(predicate::str::contains("--num-samples"));
}

#[test]
fn test_cli_version_flag() {
    inspector().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_requires_file_argument() {
    inspector().assert().failure();
}
