//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/dataviz/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. The only persisted setting is the theme
//! mode. A missing or unreadable file means the dark theme.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/dataviz/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory. `--config <FILE>` overrides it.

use crate::ui::theme::ThemeMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Persisted user configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// `"dark"` or `"light"`.
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Config {
    /// Load configuration from `path`, falling back to `Config::default()` if
    /// the file does not exist or cannot be parsed.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the default path of the config file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dataviz")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_dark() {
        assert_eq!(Config::default().theme, ThemeMode::Dark);
    }

    #[test]
    fn test_serialized_form() {
        let config = Config {
            theme: ThemeMode::Light,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        assert_eq!(json, r#"{"theme":"light"}"#);
    }

    #[test]
    fn test_deserialize_missing_theme_uses_default() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_save_to_load_from_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join("config.json");

        let config = Config {
            theme: ThemeMode::Light,
        };
        config.save_to(&config_path).expect("save_to");
        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::load_from(&config_path).expect("load_from");
        assert_eq!(loaded.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_load_garbage_falls_back_to_dark() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"theme": "sepia"}"#).expect("write");

        assert!(Config::load_from(&config_path).is_err());
        assert_eq!(Config::load(&config_path).theme, ThemeMode::Dark);
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "light", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
