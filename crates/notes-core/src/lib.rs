//! # Notes Core
//!
//! Core library for notes - a personal note tracker backed by a flat CSV file.
//!
//! This crate holds the record model, the in-memory store and the codec,
//! independent of the CLI interface. It never touches the terminal, the clock
//! or the environment: timestamps and the owner name are passed in by callers.
//!
//! ## Architecture
//!
//! - **store**: `NoteStore`, the ordered list of notes and its add/edit/remove operations
//! - **storage**: `Note` and friends, plus CSV serialization and file load/save
//! - **fs**: atomic file replacement

pub mod error;
pub mod fs;
pub mod storage;
pub mod store;

pub use error::{NotesError, Result};
pub use storage::{IdPolicy, NewNote, Note, NoteEdit, RemovedNote};
pub use store::NoteStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
