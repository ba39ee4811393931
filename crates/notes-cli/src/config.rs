use std::path::{Path, PathBuf};

use notes_core::IdPolicy;
use serde::{Deserialize, Serialize};

/// Default timestamp format for `created_at`, `edited_at` and removal receipts.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub user: UserSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
    #[serde(default)]
    pub id_policy: IdPolicy,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserSection {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<NotesConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notes"));
        }
    }
    Ok(home_dir()?.join(".config").join("notes"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: NotesConfig = toml::from_str("").unwrap();
        assert!(config.store.path.is_none());
        assert_eq!(config.store.id_policy, IdPolicy::Positional);
        assert!(config.user.name.is_none());
        assert_eq!(config.ui.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_full_config_parses() {
        let config: NotesConfig = toml::from_str(
            "[store]\npath = \"/tmp/n.csv\"\nid_policy = \"monotonic\"\n\n[user]\nname = \"sam\"\n\n[ui]\ntimestamp_format = \"%d.%m.%Y %H:%M\"\n",
        )
        .unwrap();
        assert_eq!(config.store.path.as_deref(), Some("/tmp/n.csv"));
        assert_eq!(config.store.id_policy, IdPolicy::Monotonic);
        assert_eq!(config.user.name.as_deref(), Some("sam"));
        assert_eq!(config.ui.timestamp_format, "%d.%m.%Y %H:%M");
    }

    #[test]
    fn test_unknown_id_policy_is_rejected() {
        let result: Result<NotesConfig, _> = toml::from_str("[store]\nid_policy = \"random\"\n");
        assert!(result.is_err());
    }
}
