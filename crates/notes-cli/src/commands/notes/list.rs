use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{notes_json, render_note_list};
use crate::ui::{header, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.load_store()?;
    let ui_ctx = ctx.ui_context(args.json, args.format);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(store.list()))?);
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        let count = format!("{} notes", store.len());
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&count)));
    }
    print(&ui_ctx, &render_note_list(&ui_ctx, store.list(), false));
    Ok(())
}
