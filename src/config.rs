//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory
//! (`~/.config/assistiq/config.toml` on Linux). A missing file yields
//! defaults; a malformed file is an error the caller reports.

use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, SimulationConfig, SuggestionConfig};

use crate::error::AssistError;

/// Path to the user's config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("assistiq").join("config.toml"))
}

/// Load the user's config, falling back to defaults when absent
pub fn load() -> Result<Config, AssistError> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => {
            log::debug!("no config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load config from an explicit path
pub fn load_from(path: &Path) -> Result<Config, AssistError> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| AssistError::Config(e.to_string()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
