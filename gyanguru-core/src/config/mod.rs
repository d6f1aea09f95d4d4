//! Configuration for the GyanGuru core system.
//!
//! Configuration is deserialized from TOML. Missing sections and fields
//! fall back to the defaults defined in the [`defaults`] module, so an
//! empty (or absent) configuration file yields a fully usable
//! [`CoreConfig`].

mod defaults;
mod loader;
mod types;

pub use loader::{load_config, load_config_or_default};
pub use types::{CoreConfig, LoggingConfig, NotificationConfig};
