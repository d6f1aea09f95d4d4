//! Error handling for the GyanGuru core layer.
//!
//! This module defines the error types used throughout the core crate,
//! built with `thiserror`. The main error type is [`CoreError`], which
//! wraps more specific errors such as [`ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the GyanGuru platform.
///
/// Represents all errors that can occur in the core layer. Higher layers
/// wrap this type rather than exposing the individual variants.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// General I/O errors not covered by more specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while parsing a configuration file.
    #[error("Failed to parse configuration file {path:?}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value failed validation.
    #[error("Invalid configuration value for '{field}': {reason}")]
    Validation { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn core_error_display_for_config_validation() {
        let err = CoreError::from(ConfigError::Validation {
            field: "logging.level".to_string(),
            reason: "unknown level 'loud'".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("Configuration Error"));
        assert!(msg.contains("logging.level"));
    }

    #[test]
    fn config_read_error_preserves_source() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("/etc/gyanguru/config.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_converts_into_core_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }
}
