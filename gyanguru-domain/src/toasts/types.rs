//! Core toast types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The severity of a toast, controlling how the rendering layer styles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToastSeverity {
    #[default]
    Info,
    Warning,
}

impl fmt::Display for ToastSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastSeverity::Info => write!(f, "info"),
            ToastSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Why a toast left the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissReason {
    /// The user closed it.
    ByUser,
    /// The display duration elapsed.
    Expired,
}

/// A single toast notification.
///
/// Ids are v4 UUIDs, so uniqueness holds even for toasts created within
/// the same millisecond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    #[serde(default)]
    pub severity: ToastSeverity,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(message: impl Into<String>, severity: ToastSeverity) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        }
    }
}
