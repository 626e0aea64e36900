// src/config.rs
//! Chunking configuration
//!
//! Loads from environment variables (a `.env` file is honored):
//! - CHUNK_MIN_LENGTH: chunks shorter than this may merge into the previous one (default: 20)
//! - CHUNK_MAX_LENGTH: soft ceiling per chunk; sections over twice this are split (default: 200)
//! - CHUNK_PRESERVE_FORMATTING: passed through to renderers (default: true)
//! - CHUNK_DETECT_LISTS / CHUNK_DETECT_CODE / CHUNK_DETECT_HEADINGS: classifier toggles (default: true)
//! - CHUNK_FONT_SIZE_REDUCTION: percent, clamped to 0-50 (default: 20)

use crate::errors::{ChunkerError, ChunkerResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::warn;

pub const DEFAULT_MIN_CHUNK_LENGTH: usize = 20;
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 200;
pub const DEFAULT_FONT_SIZE_REDUCTION: u8 = 20;
pub const MAX_FONT_SIZE_REDUCTION: u8 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChunkingOptions {
    pub min_chunk_length: usize,
    pub max_chunk_length: usize,
    pub preserve_formatting: bool,
    pub detect_lists: bool,
    pub detect_code: bool,
    pub detect_headings: bool,
    pub font_size_reduction: u8,
}

impl Default for ChunkingOptions {
    fn default() -> Self {
        Self {
            min_chunk_length: DEFAULT_MIN_CHUNK_LENGTH,
            max_chunk_length: DEFAULT_MAX_CHUNK_LENGTH,
            preserve_formatting: true,
            detect_lists: true,
            detect_code: true,
            detect_headings: true,
            font_size_reduction: DEFAULT_FONT_SIZE_REDUCTION,
        }
    }
}

impl ChunkingOptions {
    /// Load options from the process environment.
    pub fn from_env() -> ChunkerResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load options from any key lookup. Missing keys keep their defaults.
    pub fn from_vars<F>(lookup: F) -> ChunkerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(raw) = lookup("CHUNK_MIN_LENGTH") {
            options.min_chunk_length = parse_usize("CHUNK_MIN_LENGTH", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_MAX_LENGTH") {
            options.max_chunk_length = parse_usize("CHUNK_MAX_LENGTH", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_PRESERVE_FORMATTING") {
            options.preserve_formatting = parse_bool("CHUNK_PRESERVE_FORMATTING", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_DETECT_LISTS") {
            options.detect_lists = parse_bool("CHUNK_DETECT_LISTS", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_DETECT_CODE") {
            options.detect_code = parse_bool("CHUNK_DETECT_CODE", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_DETECT_HEADINGS") {
            options.detect_headings = parse_bool("CHUNK_DETECT_HEADINGS", &raw)?;
        }
        if let Some(raw) = lookup("CHUNK_FONT_SIZE_REDUCTION") {
            let percent: u32 = raw
                .trim()
                .parse()
                .map_err(|_| ChunkerError::invalid_value("CHUNK_FONT_SIZE_REDUCTION", raw.as_str()))?;
            options.font_size_reduction = clamp_reduction(percent);
        }

        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file with the same camelCase keys the chunks use.
    pub fn from_json_file(path: impl AsRef<Path>) -> ChunkerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ChunkerError::ConfigReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut options: Self = serde_json::from_str(&raw)?;
        options.font_size_reduction = clamp_reduction(u32::from(options.font_size_reduction));
        options.validate()?;
        Ok(options)
    }

    /// Reject settings the pipeline cannot work with.
    ///
    /// `min_chunk_length > max_chunk_length` is allowed; it is logged once
    /// here and the merge pass is skipped for such options.
    pub fn validate(&self) -> ChunkerResult<()> {
        if self.max_chunk_length == 0 {
            return Err(ChunkerError::InvalidConfiguration(
                "maxChunkLength must be greater than zero".to_string(),
            ));
        }
        if self.font_size_reduction > MAX_FONT_SIZE_REDUCTION {
            return Err(ChunkerError::invalid_value(
                "fontSizeReduction",
                self.font_size_reduction.to_string(),
            ));
        }
        if !self.merging_enabled() {
            warn!(
                min_chunk_length = self.min_chunk_length,
                max_chunk_length = self.max_chunk_length,
                "minChunkLength exceeds maxChunkLength; merging disabled"
            );
        }
        Ok(())
    }

    /// Whether the merge pass can run at all with these lengths.
    pub fn merging_enabled(&self) -> bool {
        self.min_chunk_length <= self.max_chunk_length
    }

    /// Length above which a section is forcibly split into sentences.
    pub fn forced_split_threshold(&self) -> usize {
        self.max_chunk_length.saturating_mul(2)
    }
}

fn clamp_reduction(percent: u32) -> u8 {
    // Bounded by MAX_FONT_SIZE_REDUCTION, so the cast cannot truncate
    percent.min(u32::from(MAX_FONT_SIZE_REDUCTION)) as u8
}

fn parse_usize(key: &str, raw: &str) -> ChunkerResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| ChunkerError::invalid_value(key, raw))
}

fn parse_bool(key: &str, raw: &str) -> ChunkerResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ChunkerError::invalid_value(key, raw)),
    }
}
