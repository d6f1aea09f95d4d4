//! Core infrastructure layer for the GyanGuru learning platform.
//!
//! This crate provides the foundations shared by the higher layers:
//! error types, TOML-backed configuration with defaults, logging
//! initialization built on the `tracing` ecosystem, and calendar-date
//! utilities used by the due-date scanning logic in `gyanguru-domain`.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{CoreConfig, LoggingConfig, NotificationConfig};
pub use error::{ConfigError, CoreError};
pub use types::calendar::days_until;
