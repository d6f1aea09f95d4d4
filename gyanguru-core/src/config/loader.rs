//! Configuration file loading for GyanGuru core.
//!
//! Reads and validates the core TOML configuration file. Loading is
//! strict about malformed content but lenient about absence: callers that
//! can operate on defaults use [`load_config_or_default`].

use std::path::Path;

use tracing::{debug, warn};

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Loads and validates the core configuration from a TOML file.
///
/// # Errors
///
/// Returns `CoreError::Config` if the file cannot be read, contains
/// invalid TOML, or fails validation.
pub fn load_config(path: &Path) -> Result<CoreConfig, CoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let config: CoreConfig =
        toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    validate_config(&config)?;
    debug!("Loaded core configuration from {:?}", path);
    Ok(config)
}

/// Loads the configuration from `path`, falling back to defaults if the
/// file does not exist.
///
/// A missing file is expected on first run and only logged; any other
/// failure (unreadable file, parse error, invalid values) is returned.
pub fn load_config_or_default(path: &Path) -> Result<CoreConfig, CoreError> {
    if !path.exists() {
        warn!(
            "Configuration file {:?} not found, using built-in defaults",
            path
        );
        return Ok(CoreConfig::default());
    }
    load_config(path)
}

fn validate_config(config: &CoreConfig) -> Result<(), ConfigError> {
    let level = config.logging.level.to_lowercase();
    if !VALID_LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation {
            field: "logging.level".to_string(),
            reason: format!("unknown log level '{}'", config.logging.level),
        });
    }
    let format = config.logging.format.to_lowercase();
    if !VALID_LOG_FORMATS.contains(&format.as_str()) {
        return Err(ConfigError::Validation {
            field: "logging.format".to_string(),
            reason: format!("unknown log format '{}'", config.logging.format),
        });
    }
    if config.notifications.display_duration_ms == 0 {
        return Err(ConfigError::Validation {
            field: "notifications.display_duration_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if config.notifications.lookahead_days < 0 {
        return Err(ConfigError::Validation {
            field: "notifications.lookahead_days".to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("failed to write temp config");
        file
    }

    #[test]
    fn load_config_reads_valid_file() {
        let file = write_temp_config(
            r#"
            [logging]
            level = "debug"

            [notifications]
            lookahead_days = 5
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.notifications.lookahead_days, 5);
        assert_eq!(config.notifications.display_duration_ms, 5000);
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let file = write_temp_config("[logging\nlevel = ");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn load_config_rejects_unknown_log_level() {
        let file = write_temp_config(
            r#"
            [logging]
            level = "loud"
            "#,
        );
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Config(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn load_config_rejects_zero_display_duration() {
        let file = write_temp_config(
            r#"
            [notifications]
            display_duration_ms = 0
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn load_config_or_default_handles_missing_file() {
        let config = load_config_or_default(Path::new("/nonexistent/gyanguru.toml")).unwrap();
        assert_eq!(config.notifications.display_duration_ms, 5000);
    }
}
