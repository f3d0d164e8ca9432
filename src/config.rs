//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence:
//! 1. Environment variables (`INSURAPRO_*`)
//! 2. Config file (`~/.insurapro/config.toml`)
//! 3. Defaults
//!
//! The storage directory comes from `INSURAPRO_STORAGE_PATH`, then
//! `INSURAPRO_HOME`, then `[storage] path`. Setting `INSURAPRO_HOME` therefore
//! also moves the backup, even when the config file names a directory.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// File name the customer backup has always used.
pub const DEFAULT_FILE_NAME: &str = "InsuraProCRM.json";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the backup file.
    pub path: PathBuf,

    /// Name of the backup file inside `path`.
    pub file_name: String,
}

impl StorageConfig {
    /// Full path of the backup file.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.path.join(&self.file_name)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: insurapro_home(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, e.g. "warn" or "insurapro=debug".
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Get the insurapro home directory.
///
/// Uses `INSURAPRO_HOME` environment variable if set, otherwise `~/.insurapro`.
#[must_use]
pub fn insurapro_home() -> PathBuf {
    if let Ok(home) = env::var("INSURAPRO_HOME") {
        PathBuf::from(home)
    } else {
        dirs::home_dir().map_or_else(|| PathBuf::from(".insurapro"), |h| h.join(".insurapro"))
    }
}

/// Load configuration with precedence: env vars → file → defaults.
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    let config_path = get_config_path();
    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        config = parse_config(&contents)?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

/// Parse a TOML config document.
///
/// # Errors
///
/// Returns an error if the document is not valid config TOML.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
}

/// Get the path to the config file.
fn get_config_path() -> PathBuf {
    if let Ok(path) = env::var("INSURAPRO_CONFIG") {
        return PathBuf::from(path);
    }

    insurapro_home().join("config.toml")
}

/// Apply environment variable overrides to config.
fn apply_env_overrides(config: &mut Config) {
    apply_overrides(config, |key| env::var(key).ok());
}

/// Apply overrides looked up through `var`.
fn apply_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(path) = var("INSURAPRO_STORAGE_PATH").or_else(|| var("INSURAPRO_HOME")) {
        config.storage.path = PathBuf::from(path);
    }

    if let Some(name) = var("INSURAPRO_FILE_NAME").filter(|n| !n.trim().is_empty()) {
        config.storage.file_name = name;
    }

    if let Some(level) = var("INSURAPRO_LOG_LEVEL") {
        config.logging.level = level;
    }
}
