//! Configuration data structures for GyanGuru core.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Fields not present in the configuration source receive default values
//! from the [`super::defaults`] module, and unknown fields are rejected
//! via `#[serde(deny_unknown_fields)]`.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults;

/// Configuration settings for the logging subsystem.
///
/// Used by `gyanguru_core::logging` to initialize the global logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages written to a file.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Timing parameters for the toast notification store and the due-date
/// scan scheduler.
///
/// All durations are in milliseconds. The defaults reproduce the behavior
/// of the original portal front end: toasts live for 5 seconds, the scan
/// runs 1 second after session mount, consecutive toasts are staggered by
/// 700 ms, and items due within 3 calendar days are considered upcoming.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfig {
    /// How long a toast remains active before it expires.
    #[serde(default = "defaults::default_display_duration_ms")]
    pub display_duration_ms: u64,
    /// Delay between session mount and the due-date scan.
    #[serde(default = "defaults::default_scan_defer_ms")]
    pub scan_defer_ms: u64,
    /// Delay between consecutive due-date toasts.
    #[serde(default = "defaults::default_stagger_ms")]
    pub stagger_ms: u64,
    /// Inclusive lookahead window, in calendar days, for "due soon".
    /// Day zero is today; overdue items are never reported.
    #[serde(default = "defaults::default_lookahead_days")]
    pub lookahead_days: i64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        defaults::default_notification_config()
    }
}

/// Root configuration structure for the GyanGuru core system.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    /// Configuration for the notification store and due-date scheduler.
    #[serde(default = "defaults::default_notification_config")]
    pub notifications: NotificationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn logging_config_default_values() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, None);
        assert_eq!(config.format, "text");
    }

    #[test]
    fn notification_config_default_values() {
        let config = NotificationConfig::default();
        assert_eq!(config.display_duration_ms, 5000);
        assert_eq!(config.scan_defer_ms, 1000);
        assert_eq!(config.stagger_ms, 700);
        assert_eq!(config.lookahead_days, 3);
    }

    #[test]
    fn core_config_deserialize_empty() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.notifications.display_duration_ms, 5000);
    }

    #[test]
    fn core_config_deserialize_partial() {
        let toml_str = r#"
            [notifications]
            stagger_ms = 250
        "#;
        let config: CoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.notifications.stagger_ms, 250);
        // Untouched fields keep their defaults.
        assert_eq!(config.notifications.scan_defer_ms, 1000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn core_config_deserialize_full() {
        let toml_str = r#"
            [logging]
            level = "debug"
            file_path = "/var/log/gyanguru/core.log"
            format = "json"

            [notifications]
            display_duration_ms = 8000
            scan_defer_ms = 500
            stagger_ms = 300
            lookahead_days = 7
        "#;
        let config: CoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.file_path,
            Some(PathBuf::from("/var/log/gyanguru/core.log"))
        );
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.notifications.display_duration_ms, 8000);
        assert_eq!(config.notifications.lookahead_days, 7);
    }

    #[test]
    fn core_config_rejects_unknown_fields() {
        let toml_str = r#"
            [notifications]
            stagger_ms = 250
            snooze_ms = 100
        "#;
        assert!(toml::from_str::<CoreConfig>(toml_str).is_err());
    }
}
