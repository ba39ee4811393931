//! Application context for the notes CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use notes_core::storage::{load, save};
use notes_core::{IdPolicy, NoteStore};

use crate::cli::{Cli, OutputFormat};
use crate::config::NotesConfig;
use crate::helpers::{validate_timestamp_format, Timestamps};
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_notes_path, resolve_owner};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<NotesConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&NotesConfig> {
        self.config.get_or_try_init(|| {
            let config = load_config()?;
            validate_timestamp_format(&config.ui.timestamp_format)?;
            Ok(config)
        })
    }

    /// Create a UI context for output rendering.
    pub fn ui_context(&self, json_flag: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json_flag, format, self.cli.no_color, self.cli.ascii)
    }

    /// Path of the notes file for this invocation.
    pub fn notes_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_notes_path(self.cli, self.config()?))
    }

    pub fn id_policy(&self) -> anyhow::Result<IdPolicy> {
        Ok(self.config()?.store.id_policy)
    }

    /// Owner recorded on notes added in this session.
    pub fn owner(&self) -> anyhow::Result<String> {
        Ok(resolve_owner(self.config()?))
    }

    /// Read the clock once using the configured timestamp format.
    pub fn now(&self) -> anyhow::Result<Timestamps> {
        Ok(Timestamps::now(&self.config()?.ui.timestamp_format))
    }

    /// Load the notes file. A missing file yields an empty store.
    pub fn load_store(&self) -> anyhow::Result<NoteStore> {
        let path = self.notes_path()?;
        Ok(load(&path, self.id_policy()?)?)
    }

    /// Rewrite the notes file with the store's current contents.
    pub fn save_store(&self, store: &NoteStore) -> anyhow::Result<PathBuf> {
        let path = self.notes_path()?;
        save(&path, store)?;
        Ok(path)
    }
}
