//! Input and clock helpers for the CLI.
//!
//! This module provides utilities for:
//! - Prompting the operator on a TTY or from piped lines (`input`)
//! - Timestamps and due-date defaults (`time`)

mod input;
mod time;

// Re-export public API
pub use input::{LinePrompter, Prompter, TermPrompter};
pub use time::{validate_timestamp_format, Timestamps};
