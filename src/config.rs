// Configuration module for hyfi
// This module handles loading and parsing configuration from ~/.config/hyfi/config.toml

mod types;

pub use types::{ClipboardBackend, Config, FilterConfig, ModifierKey};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/hyfi/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed successfully: {:?}", config.filter);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/hyfi/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("hyfi")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
