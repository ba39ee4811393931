//! Text and table output formatting for notes.

use notes_core::Note;

use crate::ui::format::{single_line, truncate};
use crate::ui::{badge, kv, table, Badge, UiContext};

/// Message shown whenever there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "List of notes is empty!";

const NOTE_COLUMN_WIDTH: usize = 48;

/// Render the full listing.
///
/// Pretty mode prints one table row per note. Plain mode prints a block of
/// `key=value` lines per note, separated by blank lines.
pub fn render_note_list(ctx: &UiContext, notes: &[Note], show_header: bool) -> String {
    if notes.is_empty() {
        return if ctx.mode.is_pretty() {
            badge(ctx, Badge::Info, EMPTY_LIST_MESSAGE)
        } else {
            EMPTY_LIST_MESSAGE.to_string()
        };
    }

    let mut lines = Vec::new();
    if show_header && ctx.mode.is_pretty() {
        lines.push("Your list of notes:".to_string());
    }

    if ctx.mode.is_pretty() {
        let rows: Vec<Vec<String>> = notes
            .iter()
            .enumerate()
            .map(|(idx, note)| {
                vec![
                    (idx + 1).to_string(),
                    note.id.clone(),
                    note.created_at.clone(),
                    if note.is_edited() {
                        note.edited_at.clone()
                    } else {
                        "-".to_string()
                    },
                    note.owner.clone(),
                    truncate(&single_line(&note.text), NOTE_COLUMN_WIDTH),
                    format!("{} {}", note.due_date, note.due_time).trim().to_string(),
                ]
            })
            .collect();
        lines.push(table(
            ctx,
            &["#", "ID", "Created", "Edited", "Owner", "Note", "Due"],
            &rows,
        ));
    } else {
        let blocks: Vec<String> = notes
            .iter()
            .enumerate()
            .map(|(idx, note)| note_block(ctx, idx + 1, note))
            .collect();
        lines.push(blocks.join("\n\n"));
    }

    lines.join("\n")
}

fn note_block(ctx: &UiContext, position: usize, note: &Note) -> String {
    [
        kv(ctx, "position", &position.to_string()),
        kv(ctx, "id", &note.id),
        kv(ctx, "created_at", &note.created_at),
        kv(ctx, "edited_at", &note.edited_at),
        kv(ctx, "owner", &note.owner),
        kv(ctx, "text", &single_line(&note.text)),
        kv(ctx, "due_date", &note.due_date),
        kv(ctx, "due_time", &note.due_time),
    ]
    .join("\n")
}

/// Short one-line-per-note listing shown before asking for a position.
pub fn render_note_choices(notes: &[Note]) -> String {
    notes
        .iter()
        .enumerate()
        .map(|(idx, note)| {
            format!(
                "{}. {} (ID: {})",
                idx + 1,
                truncate(&single_line(&note.text), NOTE_COLUMN_WIDTH),
                note.id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
