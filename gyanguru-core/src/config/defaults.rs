//! Default configuration values for GyanGuru core.
//!
//! These functions back `serde`'s `default` attribute in the configuration
//! structures, providing values for fields that are not present in the
//! configuration file.

use crate::config::{LoggingConfig, NotificationConfig};
use std::path::PathBuf;

/// Returns the default `LoggingConfig`.
///
/// Used by `CoreConfig` if the `logging` section is missing.
pub(super) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`, file logging disabled).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default `NotificationConfig`.
///
/// Used by `CoreConfig` if the `notifications` section is missing.
pub(super) fn default_notification_config() -> NotificationConfig {
    NotificationConfig {
        display_duration_ms: default_display_duration_ms(),
        scan_defer_ms: default_scan_defer_ms(),
        stagger_ms: default_stagger_ms(),
        lookahead_days: default_lookahead_days(),
    }
}

/// How long a toast stays on screen before it expires (5 seconds).
pub(super) fn default_display_duration_ms() -> u64 {
    5000
}

/// How long the due-date scan is deferred after session mount, so it does
/// not contend with the initial render (1 second).
pub(super) fn default_scan_defer_ms() -> u64 {
    1000
}

/// Delay between consecutive due-date toasts so they cascade visually.
pub(super) fn default_stagger_ms() -> u64 {
    700
}

/// Items due within this many calendar days (inclusive, counting today as
/// day zero) are considered upcoming.
pub(super) fn default_lookahead_days() -> i64 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_default_log_file_path() {
        assert_eq!(default_log_file_path(), None);
    }

    #[test]
    fn test_default_log_format() {
        assert_eq!(default_log_format(), "text");
    }

    #[test]
    fn test_default_notification_config_values() {
        let nc = default_notification_config();
        assert_eq!(nc.display_duration_ms, 5000);
        assert_eq!(nc.scan_defer_ms, 1000);
        assert_eq!(nc.stagger_ms, 700);
        assert_eq!(nc.lookahead_days, 3);
    }
}
