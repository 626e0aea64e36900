//! Logging setup for the chunker binary and embedding applications
//!
//! Provides:
//! - Structured logging with tracing
//! - Optional daily-rotated JSON log files

pub mod config;
pub mod tracing_config;

pub use config::{LogFormat, MonitoringConfig};
pub use tracing_config::init_tracing;
