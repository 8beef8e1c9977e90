//! Command-line surface: argument parsing and the top-level run loop.

pub mod commands;

pub use commands::{Cli, run};
