//! Snapshot types supplied by the course data providers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of deadline-bearing item a student can fall behind on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackableKind {
    Assignment,
    Quiz,
}

impl fmt::Display for TrackableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackableKind::Assignment => write!(f, "Assignment"),
            TrackableKind::Quiz => write!(f, "Quiz"),
        }
    }
}

/// A point-in-time snapshot of a deadline-bearing item.
///
/// Read-only to this layer: the scan never mutates items, it only
/// inspects a snapshot taken once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackableItem {
    pub title: String,
    pub kind: TrackableKind,
    /// Calendar due date. Items without one never count as upcoming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// True while the item has not been submitted or taken.
    pub outstanding: bool,
}

impl TrackableItem {
    pub fn new(
        title: impl Into<String>,
        kind: TrackableKind,
        due_date: Option<NaiveDate>,
        outstanding: bool,
    ) -> Self {
        Self {
            title: title.into(),
            kind,
            due_date,
            outstanding,
        }
    }

    /// Convenience constructor for an assignment snapshot.
    pub fn assignment(
        title: impl Into<String>,
        due_date: Option<NaiveDate>,
        outstanding: bool,
    ) -> Self {
        Self::new(title, TrackableKind::Assignment, due_date, outstanding)
    }

    /// Convenience constructor for a quiz snapshot.
    pub fn quiz(title: impl Into<String>, due_date: Option<NaiveDate>, outstanding: bool) -> Self {
        Self::new(title, TrackableKind::Quiz, due_date, outstanding)
    }
}
