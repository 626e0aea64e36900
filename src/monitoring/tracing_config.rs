//! Structured logging with tracing
//!
//! Sets up:
//! - Console logging on stderr, text or JSON (stdout carries chunk output)
//! - File logging with daily rotation when LOG_DIR is set, always JSON
//! - Level filtering from RUST_LOG

use tracing_appender::non_blocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::daily;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::config::{LogFormat, MonitoringConfig};
use crate::errors::{ChunkerError, ChunkerResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize the global tracing subscriber.
///
/// Returns a guard that must be kept alive for the duration of the program
/// when file logging is on. Dropping the guard stops file logging.
pub fn init_tracing(config: &MonitoringConfig) -> ChunkerResult<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    config.ensure_log_dir()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| ChunkerError::Logging(e.to_string()))?;

    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    layers.push(match config.log_format {
        LogFormat::Json => console_layer.json().boxed(),
        LogFormat::Text => console_layer.boxed(),
    });

    let mut guard = None;
    if let Some(dir) = &config.log_dir {
        let file_appender = daily(dir, &config.log_file_prefix);
        let (non_blocking_file, file_guard) = non_blocking(file_appender);

        layers.push(
            fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false) // No ANSI codes in files
                .json()
                .boxed(),
        );
        guard = Some(file_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| ChunkerError::Logging(e.to_string()))?;

    Ok(guard)
}
