//! UI primitives for the notes CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, single-line)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, header, kv, print, print_error, receipt, table};
