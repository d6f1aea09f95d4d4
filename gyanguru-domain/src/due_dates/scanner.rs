//! Upcoming-item filtering.
//!
//! An item is "upcoming" when it is still outstanding and its due date
//! falls between today (inclusive) and `lookahead_days` calendar days
//! ahead (inclusive). Overdue items and items without a due date never
//! qualify; absence of a deadline is not urgency.

use chrono::NaiveDate;

use gyanguru_core::days_until;

use super::types::TrackableItem;

/// Returns true when `item` is due within the lookahead window.
pub fn is_upcoming(item: &TrackableItem, today: NaiveDate, lookahead_days: i64) -> bool {
    if !item.outstanding {
        return false;
    }
    match item.due_date {
        Some(due) => {
            let diff = days_until(today, due);
            diff >= 0 && diff <= lookahead_days
        }
        None => false,
    }
}

/// Filters `items` down to the upcoming ones, preserving source order.
pub fn upcoming_items<'a>(
    items: &'a [TrackableItem],
    today: NaiveDate,
    lookahead_days: i64,
) -> Vec<&'a TrackableItem> {
    items
        .iter()
        .filter(|item| is_upcoming(item, today, lookahead_days))
        .collect()
}

/// Renders the toast message for an upcoming item.
pub fn due_soon_message(item: &TrackableItem) -> String {
    format!("{} due soon: \"{}\"", item.kind, item.title)
}
