use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::ui::{print, receipt};

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.load_store()?;
    let position = store.resolve_position(&args.position)?;
    let now = ctx.now()?;
    let removed = store.remove_at(position, &now.full)?;
    ctx.save_store(&store)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Note removed",
            &[("ID", removed.id()), ("Removed At", removed.removed_at.as_str())],
        ),
    );
    Ok(())
}
