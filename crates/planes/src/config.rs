//! Configuration management for planes.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.
//!
//! Where data files live is not configurable: they are always resolved
//! against the user's home directory.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "planes";

/// Default log file name.
const LOG_FILE_NAME: &str = "planes.log";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PLANES_`, sections split on `__`,
///    e.g. `PLANES_STORAGE__ON_CORRUPT=abort`)
/// 2. TOML config file at `~/.config/planes/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Data file handling.
    pub storage: StorageConfig,
}

/// Logging-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Path to the log file.
    /// Defaults to `~/.local/share/planes/planes.log`
    pub file: Option<PathBuf>,
    /// Record events to the log file.
    pub file_enabled: bool,
}

/// Data-file-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// What to do when an existing data file cannot be read or parsed.
    pub on_corrupt: CorruptPolicy,
}

/// Reaction to a data file that exists but cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptPolicy {
    /// Log the error and carry on with an empty list.
    #[default]
    Recover,
    /// Stop the command and report the error.
    Abort,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None, // Will be resolved to default at runtime
            file_enabled: true,
        }
    }
}

impl LoggingConfig {
    /// Get the log file path, resolving defaults if not set.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| Config::default_data_dir().join(LOG_FILE_NAME))
    }
}

impl Config {
    /// Load configuration, reading the TOML file at `config_path` or the
    /// default location.
    ///
    /// Later sources override earlier ones: defaults, then the TOML file (if
    /// it exists), then `PLANES_` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("PLANES_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.logging.file {
            if file.as_os_str().is_empty() {
                return Err(Error::config_validation("logging.file must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.logging.file_enabled);
        assert!(config.logging.file.is_none());
        assert_eq!(config.storage.on_corrupt, CorruptPolicy::Recover);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_log_file() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::new());

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("logging.file"));
    }

    #[test]
    fn test_log_file_default() {
        let config = Config::default();
        let path = config.logging.log_file();

        assert!(path.to_string_lossy().contains("planes.log"));
    }

    #[test]
    fn test_log_file_custom() {
        let mut config = Config::default();
        config.logging.file = Some(PathBuf::from("/custom/path/flights.log"));

        assert_eq!(
            config.logging.log_file(),
            PathBuf::from("/custom/path/flights.log")
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("planes"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_default_data_dir() {
        let path = Config::default_data_dir();
        assert!(path.to_string_lossy().contains("planes"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[logging]\nfile = \"/tmp/flights.log\"\nfile_enabled = false\n\n[storage]\non_corrupt = \"abort\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/flights.log")));
        assert!(!config.logging.file_enabled);
        assert_eq!(config.storage.on_corrupt, CorruptPolicy::Abort);
    }

    #[test]
    fn test_load_invalid_toml_value() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\non_corrupt = \"ignore\"\n").unwrap();

        let err = Config::load_from(Some(path)).unwrap_err();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_corrupt_policy_deserialize() {
        let storage: StorageConfig = serde_json::from_str(r#"{"on_corrupt": "abort"}"#).unwrap();
        assert_eq!(storage.on_corrupt, CorruptPolicy::Abort);
    }

    #[test]
    fn test_logging_config_serialize() {
        let logging = LoggingConfig::default();
        let json = serde_json::to_string(&logging).unwrap();
        assert!(json.contains("file_enabled"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
