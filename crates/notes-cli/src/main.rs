//! Notes CLI - track short notes with due dates in a plain CSV file
//!
//! This is the command-line interface for notes. It drives the core note
//! store either through the interactive menu or through one-shot commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{menu, misc, notes};
use crate::constants::exit_codes;
use crate::errors::classify;
use crate::ui::print_error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        match classify(&e) {
            Some(cli_err) => {
                print_error(&ui_ctx, &cli_err.to_string(), cli_err.hint());
                std::process::exit(cli_err.exit_code());
            }
            None => {
                print_error(&ui_ctx, &format!("{:#}", e), None);
                std::process::exit(exit_codes::FAILURE);
            }
        }
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu::handle_menu(ctx)?;
        }
        Some(Commands::List(args)) => {
            notes::handle_list(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            notes::handle_add(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            notes::handle_remove(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            notes::handle_edit(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
    }
    Ok(())
}
