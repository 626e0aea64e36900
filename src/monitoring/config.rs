//! Logging configuration
//!
//! Loads from environment variables:
//! - RUST_LOG: Tracing level (trace, debug, info, warn, error)
//! - MONITORING_ENABLED: Enable/disable logging entirely (true/false)
//! - LOG_FORMAT: Console output format (json or text)
//! - LOG_DIR: Directory for rolling log files; file logging is off when unset

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::ChunkerResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Enable or disable logging
    pub enabled: bool,

    /// Log level used when RUST_LOG holds no valid filter
    pub log_level: String,

    /// Console format (json or text)
    pub log_format: LogFormat,

    /// Directory for log files
    pub log_dir: Option<PathBuf>,

    /// Prefix of the daily log file
    pub log_file_prefix: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            log_dir: None,
            log_file_prefix: "semantic-chunker.log".to_string(),
        }
    }
}

impl MonitoringConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(enabled) = std::env::var("MONITORING_ENABLED") {
            config.enabled = enabled.to_lowercase() == "true";
        }

        if let Ok(log_level) = std::env::var("RUST_LOG") {
            config.log_level = log_level;
        }

        if let Ok(log_format) = std::env::var("LOG_FORMAT") {
            if let Ok(format) = log_format.parse() {
                config.log_format = format;
            }
        }

        if let Ok(log_dir) = std::env::var("LOG_DIR") {
            if !log_dir.trim().is_empty() {
                config.log_dir = Some(PathBuf::from(log_dir));
            }
        }

        config
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.log_dir.is_some()
    }

    /// Ensure the log directory exists, when one is configured
    pub fn ensure_log_dir(&self) -> ChunkerResult<()> {
        if let Some(dir) = &self.log_dir {
            if !dir.exists() {
                std::fs::create_dir_all(dir)?;
                tracing::info!(path = %dir.display(), "Created log directory");
            }
        }
        Ok(())
    }
}
