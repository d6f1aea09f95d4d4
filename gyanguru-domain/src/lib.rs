//! Domain layer for the GyanGuru learning platform.
//!
//! This crate hosts the session-scoped toast notification store and the
//! due-date scan scheduler that feeds it. Rendering and course data
//! providers live in the application layer; this crate only exposes the
//! in-process contract: a snapshot of trackable items in, a stream of
//! toast events out.

pub mod due_dates;
pub mod session;
pub mod toasts;

pub use due_dates::{
    due_soon_message, is_upcoming, upcoming_items, TrackableItem, TrackableKind,
};
pub use session::DueDateScheduler;
pub use toasts::{
    DefaultToastService, DismissReason, Toast, ToastError, ToastEvent, ToastService,
    ToastSeverity,
};
