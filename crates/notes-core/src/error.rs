//! Error types for notes core operations.
//!
//! Every error here is local and recoverable: the store is left untouched when
//! an operation fails, and the CLI layer maps these to user-facing messages and
//! exit codes.

use thiserror::Error;

/// Result type alias for notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Remove or edit attempted while the store holds no notes
    #[error("List of notes is empty")]
    EmptyStore,

    /// Position is non-numeric, zero, negative, or past the end of the list
    #[error("Invalid note position: {0}")]
    InvalidIndex(String),

    /// Writing the tabular representation failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Reading the tabular representation failed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for NotesError {
    fn from(err: std::io::Error) -> Self {
        NotesError::Storage(err.to_string())
    }
}

impl From<csv::Error> for NotesError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            return NotesError::Storage(err.to_string());
        }
        NotesError::Parse(err.to_string())
    }
}
