//! Due-date scanning for the GyanGuru domain layer.
//!
//! Pure filtering logic over a snapshot of deadline-bearing items. The
//! scheduling around it (deferral, staggering, the once-per-session
//! guard) lives in [`crate::session`].

pub mod scanner;
pub mod types;

pub use scanner::{due_soon_message, is_upcoming, upcoming_items};
pub use types::{TrackableItem, TrackableKind};
