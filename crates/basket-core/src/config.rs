//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/basket/config.toml)
//! 3. Environment variables (BASKET_* prefix)
//!
//! Environment variables take precedence over config file values.
//!
//! The item list itself is never persisted; this file holds only
//! presentation preferences.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "BASKET";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ask for confirmation before removing an item in the TUI
    #[serde(default)]
    pub confirm_remove: bool,

    /// Pre-fill the unit field of the TUI add form
    #[serde(default)]
    pub default_unit: Option<String>,

    /// Log file for TUI debug logging (defaults to basket-debug.log in
    /// the system cache dir when BASKET_LOG is set)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (BASKET_CONFIRM_REMOVE, BASKET_DEFAULT_UNIT)
    /// 2. Config file (~/.config/basket/config.toml or BASKET_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // BASKET_CONFIRM_REMOVE
        if let Ok(val) = std::env::var(format!("{}_CONFIRM_REMOVE", ENV_PREFIX)) {
            self.confirm_remove = val.eq_ignore_ascii_case("true") || val == "1";
        }

        // BASKET_DEFAULT_UNIT
        if let Ok(val) = std::env::var(format!("{}_DEFAULT_UNIT", ENV_PREFIX)) {
            self.default_unit = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        Ok(())
    }

    /// Get the config file path
    ///
    /// Can be overridden with BASKET_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("basket")
            .join("config.toml")
    }

    /// Default path for the TUI debug log
    pub fn default_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("basket-debug.log")
    }
}
