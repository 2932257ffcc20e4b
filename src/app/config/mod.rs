// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Format
//!
//! ```toml
//! [toasts]
//! limit = 1
//! remove_delay_ms = 5000
//!
//! [layout]
//! sidebar_open = true
//! ```
//!
//! Every field is optional. Missing fields fall back to the constants in
//! [`defaults`], and out-of-range values are clamped when the configuration is
//! turned into runtime settings.
//!
//! # Examples
//!
//! ```no_run
//! use pet_manager::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toasts.limit = Some(3);
//! config::save(&config).expect("failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications::StoreConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastsConfig {
    /// Maximum number of toasts kept at once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Delay between dismissing a toast and removing it, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_delay_ms: Option<u64>,
}

/// Shell layout settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Whether the sidebar starts open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_open: Option<bool>,
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// User preferences persisted in `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Effective toast limit, clamped to `MIN_TOAST_LIMIT..=MAX_TOAST_LIMIT`.
    #[must_use]
    pub fn toast_limit(&self) -> usize {
        clamp_toast_limit(self.toasts.limit.unwrap_or(DEFAULT_TOAST_LIMIT))
    }

    /// Effective removal delay, capped at `MAX_TOAST_REMOVE_DELAY_MS`.
    #[must_use]
    pub fn toast_remove_delay(&self) -> Duration {
        let millis = self
            .toasts
            .remove_delay_ms
            .unwrap_or(DEFAULT_TOAST_REMOVE_DELAY_MS)
            .min(MAX_TOAST_REMOVE_DELAY_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn sidebar_open(&self) -> bool {
        self.layout.sidebar_open.unwrap_or(DEFAULT_SIDEBAR_OPEN)
    }

    /// Builds the toast store settings from this configuration.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.toast_limit(), self.toast_remove_delay())
    }
}

/// Clamps a toast limit to the supported range.
#[must_use]
pub fn clamp_toast_limit(limit: usize) -> usize {
    limit.clamp(MIN_TOAST_LIMIT, MAX_TOAST_LIMIT)
}

// =============================================================================
// Path Functions
// =============================================================================

/// Returns the path of `settings.toml`, honoring an optional base directory.
///
/// See [`paths::get_app_config_dir_with_override`] for the resolution order.
#[must_use]
pub fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns the
/// default config with a warning message.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
///
/// A missing file is not an error: defaults are returned without a warning.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
            (
                Config::default(),
                Some(format!("Settings could not be loaded: {err}")),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            toasts: ToastsConfig {
                limit: Some(3),
                remove_delay_ms: Some(1_500),
            },
            layout: LayoutConfig {
                sidebar_open: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::ConfigParse(_)) => {}
            other => panic!("expected ConfigParse error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_returns_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts]\nlimit = \"many\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toasts]\nlimit = 4\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(config.toast_limit(), 4);
        assert_eq!(
            config.toast_remove_delay(),
            Duration::from_millis(DEFAULT_TOAST_REMOVE_DELAY_MS)
        );
        assert_eq!(config.sidebar_open(), DEFAULT_SIDEBAR_OPEN);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("failed to save config");

        assert!(config_path.exists());
    }

    #[test]
    fn default_config_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.toast_limit(), DEFAULT_TOAST_LIMIT);
        assert_eq!(
            config.toast_remove_delay(),
            Duration::from_millis(DEFAULT_TOAST_REMOVE_DELAY_MS)
        );
        assert!(config.sidebar_open());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            toasts: ToastsConfig {
                limit: Some(0),
                remove_delay_ms: Some(MAX_TOAST_REMOVE_DELAY_MS * 10),
            },
            layout: LayoutConfig::default(),
        };
        assert_eq!(config.toast_limit(), MIN_TOAST_LIMIT);
        assert_eq!(
            config.toast_remove_delay(),
            Duration::from_millis(MAX_TOAST_REMOVE_DELAY_MS)
        );

        let huge = Config {
            toasts: ToastsConfig {
                limit: Some(500),
                remove_delay_ms: None,
            },
            layout: LayoutConfig::default(),
        };
        assert_eq!(huge.toast_limit(), MAX_TOAST_LIMIT);
    }

    #[test]
    fn store_config_reflects_settings() {
        let config = Config {
            toasts: ToastsConfig {
                limit: Some(5),
                remove_delay_ms: Some(250),
            },
            layout: LayoutConfig::default(),
        };
        let store_config = config.store_config();
        assert_eq!(store_config.limit, 5);
        assert_eq!(store_config.remove_delay, Duration::from_millis(250));
    }
}
