// src/errors.rs
// Error handling for the edges of the chunker: configuration, I/O, output, logging.
// The chunking pipeline itself is total and never returns these.

use std::io;
use thiserror::Error;

/// Result type for fallible chunker operations
pub type ChunkerResult<T> = Result<T, ChunkerError>;

#[derive(Debug, Error)]
pub enum ChunkerError {
    // Configuration
    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read configuration file {path}: {reason}")]
    ConfigReadError { path: String, reason: String },

    // Input / output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Logging
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl ChunkerError {
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChunkerError::invalid_value("CHUNK_MAX_LENGTH", "lots");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value: CHUNK_MAX_LENGTH = lots"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: ChunkerError = io_err.into();
        assert!(matches!(err, ChunkerError::Io(_)));
    }
}
