//! Shared core types for GyanGuru.

pub mod calendar;

pub use calendar::{days_until, today_local};
