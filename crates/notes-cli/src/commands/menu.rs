//! Interactive five-action menu.
//!
//! The store is loaded once before the loop and written once when the loop
//! ends, whether it ended cleanly or on an input error. Errors raised by a
//! single action are reported and the loop carries on.

use std::io::{self, IsTerminal, Write};

use notes_core::{NewNote, NoteEdit, NoteStore, NotesError};

use crate::app::AppContext;
use crate::helpers::{LinePrompter, Prompter, TermPrompter, Timestamps};
use crate::output::{render_note_choices, render_note_list, EMPTY_LIST_MESSAGE};
use crate::ui::render::error_message;
use crate::ui::{badge, Badge, UiContext};

const ACTIONS: [&str; 5] = [
    "Display list of notes",
    "Add a note",
    "Remove a note",
    "Edit note in the list",
    "Exit the program",
];

const INVALID_CHOICE: &str = "Invalid choice. Please enter a valid option.";

/// What the loop should do after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One menu session over an already-loaded store.
pub struct Menu<'a, C> {
    store: &'a mut NoteStore,
    ui: &'a UiContext,
    owner: &'a str,
    clock: C,
}

impl<'a, C> Menu<'a, C>
where
    C: Fn() -> Timestamps,
{
    pub fn new(store: &'a mut NoteStore, ui: &'a UiContext, owner: &'a str, clock: C) -> Self {
        Self {
            store,
            ui,
            owner,
            clock,
        }
    }

    /// Run until the operator exits or input ends.
    pub fn run<P: Prompter, W: Write>(&mut self, prompter: &mut P, out: &mut W) -> anyhow::Result<()> {
        loop {
            let now = (self.clock)();
            let Some(choice) = prompter.choose("Enter your choice", &ACTIONS)? else {
                log::debug!("input ended, leaving menu");
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => {
                    writeln!(out, "{}", render_note_list(self.ui, self.store.list(), true))?;
                    Flow::Continue
                }
                "2" => self.add(prompter, out, &now)?,
                "3" => self.remove(prompter, out, &now)?,
                "4" => self.edit(prompter, out, &now)?,
                "5" => Flow::Exit,
                _ => {
                    writeln!(out, "{}", INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Run the session and then hand the store to `save`, even when the
    /// session stopped on an error. The session error wins over a save error.
    pub fn run_then_save<P, W, S>(
        &mut self,
        prompter: &mut P,
        out: &mut W,
        save: S,
    ) -> anyhow::Result<()>
    where
        P: Prompter,
        W: Write,
        S: FnOnce(&NoteStore) -> anyhow::Result<()>,
    {
        let outcome = self.run(prompter, out);
        if let Err(err) = &outcome {
            log::warn!("menu stopped early: {:#}", err);
        }
        let saved = save(&*self.store);
        outcome.and(saved)
    }

    fn add<P: Prompter, W: Write>(
        &mut self,
        prompter: &mut P,
        out: &mut W,
        now: &Timestamps,
    ) -> anyhow::Result<Flow> {
        let Some(text) = prompter.ask("Enter the note", None)? else {
            return Ok(Flow::Exit);
        };
        let Some(due_date) = prompter.ask("Enter the due date", Some(&now.date))? else {
            return Ok(Flow::Exit);
        };
        let Some(due_time) = prompter.ask("Enter the due time", Some(&now.time))? else {
            return Ok(Flow::Exit);
        };

        let note = self.store.add(
            NewNote::new(text)
                .due(due_date, due_time)
                .owner(self.owner)
                .created_at(now.full.clone()),
        );
        writeln!(
            out,
            "Note with id number {} added to the list of notes with due date {} and due time {}.",
            note.id, note.due_date, note.due_time
        )?;
        Ok(Flow::Continue)
    }

    fn remove<P: Prompter, W: Write>(
        &mut self,
        prompter: &mut P,
        out: &mut W,
        now: &Timestamps,
    ) -> anyhow::Result<Flow> {
        if self.store.is_empty() {
            writeln!(out, "Cannot remove. {}", EMPTY_LIST_MESSAGE)?;
            return Ok(Flow::Continue);
        }
        let Some(input) = self.ask_position(prompter, out, "remove")? else {
            return Ok(Flow::Exit);
        };

        let result = self
            .store
            .resolve_position(&input)
            .and_then(|position| self.store.remove_at(position, &now.full));
        match result {
            Ok(removed) => writeln!(
                out,
                "Note with ID number - {} has been removed from the list on {}.",
                removed.id(),
                removed.removed_at
            )?,
            Err(err) => self.report(out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn edit<P: Prompter, W: Write>(
        &mut self,
        prompter: &mut P,
        out: &mut W,
        now: &Timestamps,
    ) -> anyhow::Result<Flow> {
        if self.store.is_empty() {
            writeln!(out, "Cannot edit. {}", EMPTY_LIST_MESSAGE)?;
            return Ok(Flow::Continue);
        }
        let Some(input) = self.ask_position(prompter, out, "edit")? else {
            return Ok(Flow::Exit);
        };

        let position = match self.store.resolve_position(&input) {
            Ok(position) => position,
            Err(err) => {
                self.report(out, &err)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(current) = self.store.get(position).cloned() else {
            return Ok(Flow::Continue);
        };

        writeln!(out, "Your note: {}", current.text)?;
        let Some(text) = prompter.ask("Edit the note", None)? else {
            return Ok(Flow::Exit);
        };
        let Some(due_date) = prompter.ask(&format!("Due date [{}]", current.due_date), None)? else {
            return Ok(Flow::Exit);
        };
        let Some(due_time) = prompter.ask(&format!("Due time [{}]", current.due_time), None)? else {
            return Ok(Flow::Exit);
        };

        let edit = NoteEdit::new(text.trim())
            .due_date(due_date.trim())
            .due_time(due_time.trim());
        match self.store.edit_at(position, edit, &now.full) {
            Ok(note) => writeln!(
                out,
                "Note with ID number - {} has been updated in the list on {}.",
                note.id, note.edited_at
            )?,
            Err(err) => self.report(out, &err)?,
        }
        Ok(Flow::Continue)
    }

    fn ask_position<P: Prompter, W: Write>(
        &self,
        prompter: &mut P,
        out: &mut W,
        verb: &str,
    ) -> anyhow::Result<Option<String>> {
        writeln!(out, "Your list of notes:")?;
        writeln!(out, "{}", render_note_choices(self.store.list()))?;
        out.flush()?;
        prompter.ask(
            &format!(
                "Choose a note you want to {}. Type its position (1 - {})",
                verb,
                self.store.len()
            ),
            None,
        )
    }

    fn report<W: Write>(&self, out: &mut W, err: &NotesError) -> anyhow::Result<()> {
        let hint = match err {
            NotesError::InvalidIndex(_) => Some("Enter a valid number."),
            _ => None,
        };
        writeln!(out, "{}", error_message(self.ui, &err.to_string(), hint))?;
        Ok(())
    }
}

/// Run the menu against the configured notes file and save on exit.
///
/// The file is written whether the session ends normally or on an input
/// error, so nothing typed before the failure is lost.
pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let mut store = ctx.load_store()?;
    let ui_ctx = ctx.ui_context(false, None);
    let owner = ctx.owner()?;
    let timestamp_format = ctx.config()?.ui.timestamp_format.clone();

    let mut menu = Menu::new(&mut store, &ui_ctx, &owner, || {
        Timestamps::now(&timestamp_format)
    });
    let save = |store: &NoteStore| -> anyhow::Result<()> {
        let path = ctx.save_store(store)?;
        println!("List of notes saved to '{}'. Exiting...", path.display());
        Ok(())
    };

    let mut out = io::stdout();
    let result = if io::stdin().is_terminal() && io::stdout().is_terminal() {
        menu.run_then_save(&mut TermPrompter::new(), &mut out, save)
    } else {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        menu.run_then_save(&mut prompter, &mut out, save)
    };

    if result.is_err() {
        eprintln!(
            "{}",
            badge(&ui_ctx, Badge::Warn, "Menu stopped early; notes entered so far were saved.")
        );
    }
    result
}
