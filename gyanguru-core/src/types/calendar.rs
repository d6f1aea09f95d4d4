//! Calendar-date helpers.
//!
//! Due-date comparisons operate on whole calendar days, decoupled from
//! time-of-day. Working with [`NaiveDate`] directly avoids the timezone
//! and DST edge cases of truncating wall-clock timestamps.

use chrono::{Local, NaiveDate};

/// Returns the signed number of whole calendar days from `from` to `to`.
///
/// Positive when `to` is in the future relative to `from`, zero when both
/// fall on the same day, negative when `to` is in the past.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Returns today's date in the local timezone.
///
/// The original portal compared due dates against the user's local
/// wall-clock day; that choice is preserved here.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
