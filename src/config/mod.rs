// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! Loading fails soft: a missing file yields the defaults silently, while an
//! unreadable or invalid file yields the defaults plus a warning key the
//! caller can surface as a notification.

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Interval between automatic slideshow advances.
pub const SLIDESHOW_INTERVAL_MS: u64 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Preferred locale in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

fn default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns the defaults with an optional warning notification key when the
/// file exists but cannot be read or parsed.
pub fn load() -> (Config, Option<String>) {
    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the configuration from a specific path (used by tests).
pub fn load_from_path(path: &Path) -> (Config, Option<String>) {
    let Ok(content) = fs::read_to_string(path) else {
        return (
            Config::default(),
            Some("notification-config-read-error".to_string()),
        );
    };

    match toml::from_str(&content) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created or the file
/// cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves the configuration to a specific path (used by tests).
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the config
/// cannot be serialized, or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
