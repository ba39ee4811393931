//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying notes
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::notes_json;
pub use text::{render_note_choices, render_note_list, EMPTY_LIST_MESSAGE};
