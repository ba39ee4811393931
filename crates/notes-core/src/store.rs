//! In-memory note store.
//!
//! The store owns an ordered sequence of notes. Operators address notes by
//! *position* (1-based index into the current order), which is distinct from
//! the stored `id`. Every mutating operation validates before it mutates, so a
//! failed call leaves the store exactly as it was.

use log::debug;

use crate::error::{NotesError, Result};
use crate::storage::types::{IdPolicy, NewNote, Note, NoteEdit, RemovedNote};

/// Ordered collection of notes for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
    id_policy: IdPolicy,
}

impl NoteStore {
    /// Create an empty store with the default (positional) id policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an explicit id policy.
    pub fn with_policy(id_policy: IdPolicy) -> Self {
        Self {
            notes: Vec::new(),
            id_policy,
        }
    }

    /// Build a store from already-loaded notes, preserving their order.
    pub fn from_notes(notes: Vec<Note>, id_policy: IdPolicy) -> Self {
        Self { notes, id_policy }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// All notes in display order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Note at a 1-based position, if any.
    pub fn get(&self, position: usize) -> Option<&Note> {
        position.checked_sub(1).and_then(|idx| self.notes.get(idx))
    }

    /// Append a new note and return it.
    ///
    /// Under [`IdPolicy::Positional`] the id is `len + 1`, which may duplicate
    /// an id still present after earlier removals.
    pub fn add(&mut self, new_note: NewNote) -> &Note {
        let id = self.id_policy.next_id(&self.notes);
        debug!("adding note id={} position={}", id, self.notes.len() + 1);
        self.notes.push(Note {
            id,
            created_at: new_note.created_at,
            edited_at: String::new(),
            owner: new_note.owner,
            text: new_note.text,
            due_date: new_note.due_date,
            due_time: new_note.due_time,
        });
        &self.notes[self.notes.len() - 1]
    }

    /// Parse operator input into a valid position.
    ///
    /// # Errors
    ///
    /// - `NotesError::EmptyStore` if the store has no notes
    /// - `NotesError::InvalidIndex` if the input is not an integer in `1..=len`
    pub fn resolve_position(&self, input: &str) -> Result<usize> {
        self.ensure_not_empty()?;
        let trimmed = input.trim();
        let position: usize = trimmed
            .parse()
            .map_err(|_| NotesError::InvalidIndex(trimmed.to_string()))?;
        self.check_position(position)
            .map_err(|_| NotesError::InvalidIndex(trimmed.to_string()))
    }

    /// Remove the note at a 1-based position, shifting later notes left.
    ///
    /// # Errors
    ///
    /// - `NotesError::EmptyStore` if the store has no notes
    /// - `NotesError::InvalidIndex` if `position` is outside `1..=len`
    pub fn remove_at(&mut self, position: usize, removed_at: &str) -> Result<RemovedNote> {
        self.ensure_not_empty()?;
        let position = self.check_position(position)?;
        let note = self.notes.remove(position - 1);
        debug!("removed note id={} position={}", note.id, position);
        Ok(RemovedNote {
            note,
            removed_at: removed_at.to_string(),
        })
    }

    /// Edit the note at a 1-based position and return the updated note.
    ///
    /// Text always replaces. Blank or absent due fields keep their previous
    /// values. `edited_at` is always set.
    ///
    /// # Errors
    ///
    /// - `NotesError::EmptyStore` if the store has no notes
    /// - `NotesError::InvalidIndex` if `position` is outside `1..=len`
    pub fn edit_at(&mut self, position: usize, edit: NoteEdit, edited_at: &str) -> Result<&Note> {
        self.ensure_not_empty()?;
        let position = self.check_position(position)?;
        let note = &mut self.notes[position - 1];

        note.text = edit.text;
        if let Some(date) = non_blank(edit.due_date) {
            note.due_date = date;
        }
        if let Some(time) = non_blank(edit.due_time) {
            note.due_time = time;
        }
        note.edited_at = edited_at.to_string();
        debug!("edited note id={} position={}", note.id, position);
        Ok(&*note)
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.notes.is_empty() {
            return Err(NotesError::EmptyStore);
        }
        Ok(())
    }

    fn check_position(&self, position: usize) -> Result<usize> {
        if position == 0 || position > self.notes.len() {
            return Err(NotesError::InvalidIndex(position.to_string()));
        }
        Ok(position)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str) -> NewNote {
        NewNote::new(text)
            .due("2024-01-01", "09:00")
            .owner("alice")
            .created_at("2024-01-01 08:00:00")
    }

    fn store_with(count: usize) -> NoteStore {
        let mut store = NoteStore::new();
        for i in 1..=count {
            store.add(sample(&format!("note {}", i)));
        }
        store
    }

    fn ids(store: &NoteStore) -> Vec<&str> {
        store.list().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_length_plus_one() {
        let mut store = NoteStore::new();
        let note = store.add(sample("first"));
        assert_eq!(note.id, "1");
        assert_eq!(note.edited_at, "");
        assert_eq!(note.owner, "alice");

        let note = store.add(sample("second"));
        assert_eq!(note.id, "2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_positional_ids_collide_after_removal() {
        let mut store = store_with(3);
        store.remove_at(1, "now").unwrap();
        assert_eq!(ids(&store), vec!["2", "3"]);

        let added = store.add(sample("fourth")).id.clone();
        assert_eq!(added, "3");
        assert_eq!(ids(&store), vec!["2", "3", "3"]);
    }

    #[test]
    fn test_positional_id_after_removing_middle_duplicates_last() {
        let mut store = store_with(3);
        store.remove_at(2, "now").unwrap();
        let added = store.add(sample("again")).id.clone();
        assert_eq!(added, "3");
        assert_eq!(ids(&store), vec!["1", "3", "3"]);
    }

    #[test]
    fn test_monotonic_ids_do_not_collide() {
        let mut store = NoteStore::with_policy(IdPolicy::Monotonic);
        for i in 1..=3 {
            store.add(sample(&format!("note {}", i)));
        }
        store.remove_at(1, "now").unwrap();
        let added = store.add(sample("fourth")).id.clone();
        assert_eq!(added, "4");
    }

    #[test]
    fn test_length_tracks_adds_minus_removes() {
        let mut store = store_with(5);
        store.remove_at(5, "now").unwrap();
        store.remove_at(1, "now").unwrap();
        assert!(store.remove_at(9, "now").is_err());
        store.add(sample("extra"));
        assert_eq!(store.list().len(), 6 - 2);
    }

    #[test]
    fn test_remove_returns_stored_id_and_timestamp() {
        let mut store = store_with(3);
        let removed = store.remove_at(2, "2024-02-02 10:00:00").unwrap();
        assert_eq!(removed.id(), "2");
        assert_eq!(removed.note.text, "note 2");
        assert_eq!(removed.removed_at, "2024-02-02 10:00:00");
        assert_eq!(ids(&store), vec!["1", "3"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_store_unchanged() {
        let mut store = store_with(2);
        let before = store.clone();

        assert!(matches!(
            store.remove_at(0, "now"),
            Err(NotesError::InvalidIndex(_))
        ));
        assert!(matches!(
            store.remove_at(3, "now"),
            Err(NotesError::InvalidIndex(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_on_empty_store() {
        let mut store = NoteStore::new();
        assert!(matches!(
            store.remove_at(1, "now"),
            Err(NotesError::EmptyStore)
        ));
    }

    #[test]
    fn test_resolve_position_rejects_bad_input() {
        let store = store_with(2);
        for input in ["abc", "0", "-1", "3", "", "1.5"] {
            assert!(
                matches!(store.resolve_position(input), Err(NotesError::InvalidIndex(_))),
                "input {:?} should be invalid",
                input
            );
        }
        assert_eq!(store.resolve_position(" 2 ").unwrap(), 2);
    }

    #[test]
    fn test_resolve_position_rejects_oversized_numbers() {
        let store = store_with(2);
        for input in ["4294967297", "18446744073709551617", "+0"] {
            assert!(
                matches!(store.resolve_position(input), Err(NotesError::InvalidIndex(_))),
                "input {:?} should be invalid",
                input
            );
        }
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_resolve_position_on_empty_store() {
        let store = NoteStore::new();
        assert!(matches!(
            store.resolve_position("1"),
            Err(NotesError::EmptyStore)
        ));
    }

    #[test]
    fn test_edit_keeps_due_fields_when_blank() {
        let mut store = store_with(1);
        let note = store
            .edit_at(1, NoteEdit::new("changed").due_date("").due_time("  "), "later")
            .unwrap();
        assert_eq!(note.text, "changed");
        assert_eq!(note.due_date, "2024-01-01");
        assert_eq!(note.due_time, "09:00");
        assert_eq!(note.edited_at, "later");

        let note = store.edit_at(1, NoteEdit::new("again"), "later still").unwrap();
        assert_eq!(note.due_date, "2024-01-01");
        assert_eq!(note.edited_at, "later still");
    }

    #[test]
    fn test_edit_replaces_due_fields_when_given() {
        let mut store = store_with(1);
        let note = store
            .edit_at(
                1,
                NoteEdit::new("moved").due_date("2024-03-03").due_time("18:30"),
                "later",
            )
            .unwrap();
        assert_eq!(note.due_date, "2024-03-03");
        assert_eq!(note.due_time, "18:30");
        assert_eq!(note.id, "1");
        assert_eq!(note.created_at, "2024-01-01 08:00:00");
    }

    #[test]
    fn test_edit_invalid_position_leaves_store_unchanged() {
        let mut store = store_with(2);
        let before = store.clone();
        assert!(matches!(
            store.edit_at(5, NoteEdit::new("x"), "now"),
            Err(NotesError::InvalidIndex(_))
        ));
        assert_eq!(store, before);

        let mut empty = NoteStore::new();
        assert!(matches!(
            empty.edit_at(1, NoteEdit::new("x"), "now"),
            Err(NotesError::EmptyStore)
        ));
    }

    #[test]
    fn test_get_is_one_based() {
        let store = store_with(2);
        assert!(store.get(0).is_none());
        assert_eq!(store.get(1).map(|n| n.text.as_str()), Some("note 1"));
        assert!(store.get(3).is_none());
    }
}
