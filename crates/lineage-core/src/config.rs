// Rust guideline compliant 2026-02-06

//! Configuration management for Lineage.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "lineage.toml";

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses `json`, `table` or `plain`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "table" => Some(Self::Table),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

/// Configuration for Lineage behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level written to stderr.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether log lines are emitted as JSON.
    #[serde(default)]
    pub log_json: bool,

    /// Whether skipped family members are listed after command output.
    #[serde(default)]
    pub report_unresolved: bool,
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            log_json: false,
            report_unresolved: false,
        }
    }
}

impl Config {
    /// Loads configuration from `lineage.toml` in `dir` and the environment.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/lineage.toml`
    /// 3. Environment variables with `LINEAGE_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        Self::load_file(&dir.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from an explicit file path and the environment.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();

        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            config = toml::from_str(&content)
                .map_err(|e| crate::Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LINEAGE_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `LINEAGE_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `LINEAGE_LOG_JSON` - JSON log lines (true/false)
    /// - `LINEAGE_REPORT_UNRESOLVED` - List skipped members (true/false)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LINEAGE_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                crate::Error::InvalidConfig(
                    "LINEAGE_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("LINEAGE_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Ok(val) = std::env::var("LINEAGE_LOG_JSON") {
            self.log_json = val.parse().map_err(|_| {
                crate::Error::InvalidConfig("LINEAGE_LOG_JSON must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("LINEAGE_REPORT_UNRESOLVED") {
            self.report_unresolved = val.parse().map_err(|_| {
                crate::Error::InvalidConfig(
                    "LINEAGE_REPORT_UNRESOLVED must be true or false".to_string(),
                )
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a known level.
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(crate::Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `lineage.toml` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::Error::InvalidConfig(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
