use notes_core::NewNote;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    if args.text.trim().is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "Note text cannot be empty",
            "Hint: Pass the text as the first argument, e.g. `notes add \"buy milk\"`.",
        )
        .into());
    }

    let mut store = ctx.load_store()?;
    let now = ctx.now()?;
    let due_date = args.due_date.clone().unwrap_or_else(|| now.date.clone());
    let due_time = args.due_time.clone().unwrap_or_else(|| now.time.clone());

    let note = store
        .add(
            NewNote::new(args.text.as_str())
                .due(due_date, due_time)
                .owner(ctx.owner()?)
                .created_at(now.full),
        )
        .clone();
    let position = store.len();
    let path = ctx.save_store(&store)?;

    if ctx.quiet() {
        println!("{}", note.id);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    let position = position.to_string();
    let path = path.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Note added",
            &[
                ("ID", note.id.as_str()),
                ("Position", position.as_str()),
                ("Due Date", note.due_date.as_str()),
                ("Due Time", note.due_time.as_str()),
                ("File", path.as_str()),
            ],
        ),
    );
    Ok(())
}
