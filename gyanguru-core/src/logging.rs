//! Logging system for GyanGuru core.
//!
//! Configurable logging built on the `tracing` ecosystem, with console
//! output and optional file logging (text or JSON format). The global
//! filter honors `RUST_LOG` when set, falling back to the configured
//! level otherwise.

use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;
use crate::error::CoreError;

/// Holds the `WorkerGuard` for the non-blocking file writer.
///
/// The guard must stay alive for the lifetime of the application so
/// buffered log lines are flushed on shutdown.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests and early application startup before the full
/// configuration is available. Filters via `RUST_LOG`, defaulting to
/// "info". Errors (e.g. a global logger already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Initializes the global logging system from a [`LoggingConfig`].
///
/// Installs a console layer and, if `file_path` is set, a daily-rolling
/// non-blocking file layer in the configured format.
///
/// # Errors
///
/// Returns `CoreError::LoggingInitialization` if the level string is
/// invalid or a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CoreError> {
    let level = config.level.to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => {
            return Err(CoreError::LoggingInitialization(format!(
                "invalid log level '{}'",
                other
            )))
        }
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();
    layers.push(
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .boxed(),
    );

    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer);
        *LOG_WORKER_GUARD
            .lock()
            .expect("log worker guard mutex poisoned") = Some(guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| CoreError::LoggingInitialization(e.to_string()))
}

/// Creates a daily-rolling file logging layer and its worker guard.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("gyanguru.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
        _ => fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
    };
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        assert!(matches!(
            init_logging(&config),
            Err(CoreError::LoggingInitialization(_))
        ));
    }

    #[test]
    fn init_minimal_logging_is_repeatable() {
        // A second call must not panic even though a subscriber is set.
        init_minimal_logging();
        init_minimal_logging();
    }
}
