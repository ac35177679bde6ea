// Configuration module for scroll-dispatch
// This module handles loading and parsing configuration from ~/.config/scroll-dispatch/config.toml

mod types;

pub use types::{Config, DispatchConfig, FeedConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrollDispatchError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/scroll-dispatch/config.toml
/// Returns default configuration if file doesn't exist or on read/parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path with the same fallback rules as [`load_config`]
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(config_path) {
        Ok(config) => {
            log::debug!("Config parsed successfully: {:?}", config.dispatch);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to load config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Reads and parses a configuration file
pub fn read_config(config_path: &Path) -> Result<Config, ScrollDispatchError> {
    let contents =
        fs::read_to_string(config_path).map_err(|source| ScrollDispatchError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;
    log::debug!("Config file read successfully, {} bytes", contents.len());

    Ok(toml::from_str::<Config>(&contents)?)
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/scroll-dispatch/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("scroll-dispatch")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
