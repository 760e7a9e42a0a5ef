//! Persistence: the JSON document store and TOML configuration.

mod config;
mod document;

pub use config::{Config, RemindersConfig, SoundPreset, SOUND_PRESETS};
pub use document::{HubDocument, Store};

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/dayhub[-dev]/` based on DAYHUB_ENV.
///
/// Set DAYHUB_ENV=dev to use the development data directory.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYHUB_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayhub-dev")
    } else {
        base_dir.join("dayhub")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
