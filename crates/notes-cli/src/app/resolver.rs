//! Path resolution for config and notes files.

use std::path::PathBuf;

use notes_core::storage::DEFAULT_FILE_NAME;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, NotesConfig};

/// Resolve the config file path, checking NOTES_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("NOTES_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to defaults when none exists.
pub fn load_config() -> anyhow::Result<NotesConfig> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        log::debug!("no config at {}, using defaults", config_path.display());
        return Ok(NotesConfig::default());
    }
    log::debug!("reading config {}", config_path.display());
    read_config(&config_path)
}

/// Resolve the notes file path from CLI args, then config, then the default.
pub fn resolve_notes_path(cli: &Cli, config: &NotesConfig) -> PathBuf {
    if let Some(path) = cli.file.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_FILE_NAME)
}

/// Identity recorded as the owner of new notes.
pub fn resolve_owner(config: &NotesConfig) -> String {
    let configured = config.user.name.clone();
    configured
        .into_iter()
        .chain(std::env::var("USER").ok())
        .chain(std::env::var("USERNAME").ok())
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_notes_path_precedence() {
        let mut config = NotesConfig::default();
        let cli = Cli::try_parse_from(["notes", "--file", "/tmp/flag.csv", "list"]).unwrap();
        config.store.path = Some("/tmp/config.csv".to_string());
        assert_eq!(
            resolve_notes_path(&cli, &config),
            PathBuf::from("/tmp/flag.csv")
        );

        let cli = Cli {
            file: None,
            ..cli
        };
        assert_eq!(
            resolve_notes_path(&cli, &config),
            PathBuf::from("/tmp/config.csv")
        );

        config.store.path = None;
        assert_eq!(
            resolve_notes_path(&cli, &config),
            PathBuf::from(DEFAULT_FILE_NAME)
        );
    }

    #[test]
    fn test_configured_owner_wins() {
        let mut config = NotesConfig::default();
        config.user.name = Some("sam".to_string());
        assert_eq!(resolve_owner(&config), "sam");
    }

    #[test]
    fn test_owner_is_never_blank() {
        let mut config = NotesConfig::default();
        config.user.name = Some("   ".to_string());
        assert!(!resolve_owner(&config).trim().is_empty());
    }
}
