//! CLI error types for structured error handling.
//!
//! Core errors are mapped onto a small set of CLI errors, each with an exit
//! code and an optional hint for the operator.

use std::fmt;

use notes_core::NotesError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Nothing to act on (empty list of notes)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// The notes file could not be read or written
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::Storage(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error with message and hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint line to show under the message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::Storage(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Storage(_) => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<&NotesError> for CliError {
    fn from(err: &NotesError) -> Self {
        match err {
            NotesError::EmptyStore => CliError::not_found(
                "List of notes is empty!",
                "Hint: Add one with `notes add <TEXT>`.",
            ),
            NotesError::InvalidIndex(_) => CliError::invalid_input_with_hint(
                err.to_string(),
                "Hint: Run `notes list` to see valid positions.",
            ),
            NotesError::Serialization(_) | NotesError::Parse(_) | NotesError::Storage(_) => {
                CliError::Storage(err.to_string())
            }
        }
    }
}

/// Map any handler error onto a CLI error, if it has a known shape.
pub fn classify(err: &anyhow::Error) -> Option<CliError> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return Some(cli_err.clone());
    }
    if let Some(notes_err) = err.downcast_ref::<NotesError>() {
        return Some(CliError::from(notes_err));
    }
    None
}
