//! JSON output formatting for notes.

use notes_core::Note;

/// Convert a note to JSON for output, tagged with its 1-based position.
pub fn note_json(position: usize, note: &Note) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "id": note.id,
        "created_at": note.created_at,
        "edited_at": note.edited_at,
        "owner": note.owner,
        "text": note.text,
        "due_date": note.due_date,
        "due_time": note.due_time,
    })
}

/// Convert all notes to a JSON array in display order.
pub fn notes_json(notes: &[Note]) -> Vec<serde_json::Value> {
    notes
        .iter()
        .enumerate()
        .map(|(idx, note)| note_json(idx + 1, note))
        .collect()
}
