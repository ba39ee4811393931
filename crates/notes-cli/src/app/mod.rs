//! Application-level utilities for the notes CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path and owner resolution for config and notes files

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
