//! Toast notification store for the GyanGuru domain layer.
//!
//! A session owns exactly one store. Toasts are admitted in display
//! order, expire after a fixed duration unless dismissed earlier, and
//! every removal cancels the matching expiry timer so no callback can
//! fire against a torn-down session.

pub mod errors;
pub mod events;
pub mod service;
pub mod types;

pub use errors::ToastError;
pub use events::ToastEvent;
pub use service::{DefaultToastService, ToastService, DEFAULT_EVENT_CAPACITY};
pub use types::{DismissReason, Toast, ToastSeverity};
