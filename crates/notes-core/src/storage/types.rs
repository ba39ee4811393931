//! Core data types for the note store.
//!
//! Every persisted field is an opaque string. Numeric interpretation (for
//! example of `id`) happens only at the point of use.

use serde::{Deserialize, Serialize};

/// A single tracked note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier assigned at creation (see [`IdPolicy`])
    pub id: String,

    /// When this note was created
    pub created_at: String,

    /// When this note was last edited; empty until the first edit
    pub edited_at: String,

    /// User that created this note
    pub owner: String,

    /// Note body
    pub text: String,

    /// Due date in caller-supplied format
    pub due_date: String,

    /// Due time in caller-supplied format
    pub due_time: String,
}

impl Note {
    /// Interpret the stored id as an integer, if it is one.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }

    /// Whether the note has been edited since creation.
    pub fn is_edited(&self) -> bool {
        !self.edited_at.is_empty()
    }
}

/// Builder for creating new notes.
///
/// `owner` and `created_at` are supplied by the caller so the store never
/// reads the environment or the clock.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub text: String,
    pub due_date: String,
    pub due_time: String,
    pub owner: String,
    pub created_at: String,
}

impl NewNote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn due(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.due_date = date.into();
        self.due_time = time.into();
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn created_at(mut self, timestamp: impl Into<String>) -> Self {
        self.created_at = timestamp.into();
        self
    }
}

/// Replacement values for an edit.
///
/// `text` always replaces. A due field that is `None` or blank keeps the
/// existing value.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub text: String,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
}

impl NoteEdit {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            due_date: None,
            due_time: None,
        }
    }

    pub fn due_date(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }

    pub fn due_time(mut self, time: impl Into<String>) -> Self {
        self.due_time = Some(time.into());
        self
    }
}

/// A note taken out of the store, with the time it was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedNote {
    pub note: Note,
    pub removed_at: String,
}

impl RemovedNote {
    /// Stored id of the removed note.
    pub fn id(&self) -> &str {
        &self.note.id
    }
}

/// How ids are assigned to new notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `id = len + 1`. Can duplicate an id still present after a removal.
    #[default]
    Positional,

    /// `id = max numeric id + 1`. Non-numeric ids are ignored.
    Monotonic,
}

impl IdPolicy {
    /// Compute the id for a note appended to `existing`.
    pub fn next_id(&self, existing: &[Note]) -> String {
        let next = match self {
            IdPolicy::Positional => existing.len() as u64 + 1,
            IdPolicy::Monotonic => {
                existing
                    .iter()
                    .filter_map(Note::numeric_id)
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        };
        next.to_string()
    }
}
