//! TOML-based application configuration.
//!
//! Stored at `~/.config/dayhub/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::data_dir;

const CONFIG_FILE: &str = "config.toml";

/// A selectable reminder sound.
#[derive(Debug, Clone, Copy)]
pub struct SoundPreset {
    pub name: &'static str,
    pub url: &'static str,
}

/// Sounds offered by name in the entry surfaces. Any URL or file path works
/// as well; these are just the bundled choices.
pub const SOUND_PRESETS: &[SoundPreset] = &[
    SoundPreset {
        name: "beep",
        url: "https://actions.google.com/sounds/v1/alarms/beep_short.ogg",
    },
    SoundPreset {
        name: "chime",
        url: "https://actions.google.com/sounds/v1/alarms/digital_watch_alarm_long.ogg",
    },
    SoundPreset {
        name: "bell",
        url: "https://actions.google.com/sounds/v1/alarms/bugle_tune.ogg",
    },
];

/// Reminder polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemindersConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Shared poll cadence in seconds for to-dos and events.
    ///
    /// To-do reminders match their minute exactly, so a cadence above 60
    /// can skip a match entirely; event reminders use a window and
    /// tolerate any cadence.
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u64,
    /// Sound used when an item has none of its own.
    #[serde(default = "default_sound")]
    pub default_sound: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dayhub/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reminders: RemindersConfig,
}

fn default_true() -> bool {
    true
}
fn default_poll_secs() -> u64 {
    10
}
fn default_sound() -> String {
    SOUND_PRESETS[0].url.to_string()
}

impl Default for RemindersConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_secs: default_poll_secs(),
            default_sound: default_sound(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reminders: RemindersConfig::default(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })?;
        Ok(dir.join(CONFIG_FILE))
    }

    /// Load from disk or write and return the default.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from(CONFIG_FILE),
            message: e.to_string(),
        })?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning the default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Resolve a `--sound` argument: a preset name or a literal URL/path.
    pub fn resolve_sound(value: &str) -> String {
        SOUND_PRESETS
            .iter()
            .find(|p| p.name == value)
            .map(|p| p.url.to_string())
            .unwrap_or_else(|| value.to_string())
    }
}
