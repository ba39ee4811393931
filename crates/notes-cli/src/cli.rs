use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - track short notes with due dates in a plain CSV file
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes file
    #[arg(short, long, global = true, env = "NOTES_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_enum, value_name = "FORMAT", conflicts_with = "json")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Due date (defaults to today)
    #[arg(long)]
    pub due_date: Option<String>,

    /// Due time (defaults to now)
    #[arg(long)]
    pub due_time: Option<String>,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the note as shown by `notes list`
    #[arg(value_name = "POSITION", allow_hyphen_values = true)]
    pub position: String,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Position of the note as shown by `notes list`
    #[arg(value_name = "POSITION", allow_hyphen_values = true)]
    pub position: String,

    /// Replacement text (keeps the current text if omitted)
    #[arg(long)]
    pub text: Option<String>,

    /// New due date (keeps the current one if omitted or empty)
    #[arg(long)]
    pub due_date: Option<String>,

    /// New due time (keeps the current one if omitted or empty)
    #[arg(long)]
    pub due_time: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default when no command is given)
    Menu,

    /// List notes
    List(ListArgs),

    /// Add a note
    Add(AddArgs),

    /// Remove a note by position
    Remove(RemoveArgs),

    /// Edit a note by position
    Edit(EditArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_remove_accepts_negative_position_text() {
        let cli = Cli::try_parse_from(["notes", "remove", "-1"]).unwrap();
        match cli.command {
            Some(Commands::Remove(args)) => assert_eq!(args.position, "-1"),
            _ => panic!("expected remove command"),
        }
    }

    #[test]
    fn test_list_json_conflicts_with_format() {
        let result = Cli::try_parse_from(["notes", "list", "--json", "--format", "plain"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_command_means_menu() {
        let cli = Cli::try_parse_from(["notes"]).unwrap();
        assert!(cli.command.is_none());
    }
}
