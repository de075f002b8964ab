// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification center's configuration, including
//! loading and saving it to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use herald::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_notifications = 3;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.max_notifications, 3);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Herald";

/// Static settings shared by the notification stack and the modal gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lifespan of a notification in milliseconds.
    #[serde(alias = "notificationDuration")]
    pub notification_duration_ms: u64,
    /// Eviction ceiling for the notification stack.
    #[serde(alias = "maxNotifications")]
    pub max_notifications: usize,
    /// Delay before a fresh notification switches to active style.
    pub activation_delay_ms: u64,
    /// Offset between two consecutive stacked notifications.
    pub stack_spacing: u32,
    /// Character limit applied to notification messages.
    pub max_message_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            max_notifications: DEFAULT_MAX_NOTIFICATIONS,
            activation_delay_ms: DEFAULT_ACTIVATION_DELAY_MS,
            stack_spacing: DEFAULT_STACK_SPACING,
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

impl Config {
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    #[must_use]
    pub fn activation_delay(&self) -> Duration {
        Duration::from_millis(self.activation_delay_ms)
    }

    /// Returns the eviction ceiling, never lower than one slot.
    #[must_use]
    pub fn max_notifications(&self) -> usize {
        self.max_notifications.max(MIN_MAX_NOTIFICATIONS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads settings from `path`. Malformed TOML falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
