//! Configuration module for Report Desk.

use serde::Deserialize;
use std::path::Path;

use crate::{DeskError, Result};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/reportdesk.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Folder library configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// Built-in seed to start from (sample / empty).
    #[serde(default = "default_seed")]
    pub seed: String,
    /// JSON seed document; takes precedence over `seed` when set.
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Timezone used to stamp upload dates (e.g., "UTC", "Asia/Tokyo").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Folder the read-only explorer opens on.
    #[serde(default = "default_explorer_folder")]
    pub explorer_default_folder: String,
    /// File extensions accepted by the upload picker. Empty accepts all.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

fn default_seed() -> String {
    "sample".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_explorer_folder() -> String {
    "1".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    [".xlsx", ".xls", ".csv", ".pdf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            seed_path: None,
            timezone: default_timezone(),
            explorer_default_folder: default_explorer_folder(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Folder library configuration.
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DeskError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DeskError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `REPORTDESK_SEED_PATH`: Override the JSON seed document path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(seed_path) = std::env::var("REPORTDESK_SEED_PATH") {
            if !seed_path.is_empty() {
                self.library.seed_path = Some(seed_path);
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The timezone is not a known IANA name
    /// - The built-in seed name is unknown
    pub fn validate(&self) -> Result<()> {
        if self.library.timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(DeskError::Config(format!(
                "unknown timezone: {}",
                self.library.timezone
            )));
        }
        if !matches!(self.library.seed.as_str(), "sample" | "empty") {
            return Err(DeskError::Config(format!(
                "unknown seed '{}' (expected sample or empty)",
                self.library.seed
            )));
        }
        Ok(())
    }
}
