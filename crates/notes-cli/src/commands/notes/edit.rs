use notes_core::NoteEdit;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if args.text.is_none() && args.due_date.is_none() && args.due_time.is_none() {
        return Err(CliError::invalid_input_with_hint(
            "Nothing to edit",
            "Hint: Pass --text, --due-date or --due-time.",
        )
        .into());
    }

    let mut store = ctx.load_store()?;
    let position = store.resolve_position(&args.position)?;
    let current_text = store
        .get(position)
        .map(|note| note.text.clone())
        .unwrap_or_default();

    let mut edit = NoteEdit::new(args.text.clone().unwrap_or(current_text));
    if let Some(date) = &args.due_date {
        edit = edit.due_date(date.as_str());
    }
    if let Some(time) = &args.due_time {
        edit = edit.due_time(time.as_str());
    }

    let now = ctx.now()?;
    let note = store.edit_at(position, edit, &now.full)?.clone();
    ctx.save_store(&store)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Note updated",
            &[
                ("ID", note.id.as_str()),
                ("Due Date", note.due_date.as_str()),
                ("Due Time", note.due_time.as_str()),
                ("Edited At", note.edited_at.as_str()),
            ],
        ),
    );
    Ok(())
}
