//! Session integration for the due-date scan.
//!
//! A [`DueDateScheduler`] is created per authenticated student session.
//! It owns the scan guard and the handle of the deferred scan task, so
//! re-renders of the session view cannot double-fire the scan and
//! teardown can cancel everything still pending.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use gyanguru_core::config::NotificationConfig;
use gyanguru_core::types::calendar::today_local;

use crate::due_dates::{due_soon_message, upcoming_items, TrackableItem};
use crate::toasts::{ToastService, ToastSeverity};

/// Runs the due-date scan once per mounted session and feeds the results
/// to the toast store.
pub struct DueDateScheduler {
    toasts: Arc<dyn ToastService>,
    /// Scan guard: set synchronously before any deferred work is spawned.
    scanned: AtomicBool,
    scan_task: Mutex<Option<JoinHandle<()>>>,
    scan_defer: Duration,
    stagger: Duration,
    lookahead_days: i64,
}

impl DueDateScheduler {
    pub fn new(toasts: Arc<dyn ToastService>, config: &NotificationConfig) -> Self {
        Self {
            toasts,
            scanned: AtomicBool::new(false),
            scan_task: Mutex::new(None),
            scan_defer: Duration::from_millis(config.scan_defer_ms),
            stagger: Duration::from_millis(config.stagger_ms),
            lookahead_days: config.lookahead_days,
        }
    }

    /// Called when the student session view mounts.
    ///
    /// The first call defers the scan by `scan_defer`, then posts one
    /// warning toast per upcoming item in `snapshot`, staggered by
    /// `stagger` between consecutive posts so the k-th toast lands at
    /// `scan_defer + k * stagger`. Admission order equals snapshot order.
    /// Every later call for the same session is a no-op.
    pub fn on_session_mount(&self, snapshot: Vec<TrackableItem>) {
        if self.scanned.swap(true, Ordering::SeqCst) {
            debug!("Due-date scan already ran for this session, skipping");
            return;
        }

        let toasts = Arc::clone(&self.toasts);
        let scan_defer = self.scan_defer;
        let stagger = self.stagger;
        let lookahead_days = self.lookahead_days;
        // Deadlines are anchored at mount time, not at each await, so the
        // k-th toast lands at `scan_defer + k * stagger` after the mount.
        let mounted_at = tokio::time::Instant::now();
        let handle = tokio::spawn(async move {
            // Let the initial render finish before scanning.
            tokio::time::sleep_until(mounted_at + scan_defer).await;

            let today = today_local();
            let upcoming: Vec<TrackableItem> = upcoming_items(&snapshot, today, lookahead_days)
                .into_iter()
                .cloned()
                .collect();
            info!(
                "Due-date scan found {} upcoming item(s) within {} day(s)",
                upcoming.len(),
                lookahead_days
            );

            for (index, item) in upcoming.iter().enumerate() {
                if index > 0 {
                    tokio::time::sleep_until(mounted_at + scan_defer + stagger * index as u32)
                        .await;
                }
                if let Err(err) = toasts
                    .post(&due_soon_message(item), ToastSeverity::Warning)
                    .await
                {
                    warn!("Dropping due-date toast for \"{}\": {}", item.title, err);
                    return;
                }
            }
        });
        *self
            .scan_task
            .lock()
            .expect("scan task handle poisoned") = Some(handle);
    }

    /// Tears the session down: cancels the deferred scan if it has not
    /// fired yet, then shuts the toast store down, cancelling every
    /// outstanding expiry timer.
    pub async fn teardown(&self) {
        self.abort_scan_task();
        self.toasts.shutdown().await;
    }

    fn abort_scan_task(&self) {
        if let Some(handle) = self
            .scan_task
            .lock()
            .expect("scan task handle poisoned")
            .take()
        {
            handle.abort();
        }
    }
}

impl Drop for DueDateScheduler {
    fn drop(&mut self) {
        self.abort_scan_task();
    }
}
