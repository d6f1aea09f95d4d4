//! Toast service: admission, ordered display, timed expiry, and manual
//! dismissal of toast notifications.
//!
//! Each admitted toast arms a one-shot expiry task whose `JoinHandle` is
//! retained keyed by toast id, so manual dismissal can cancel the timer
//! and teardown can cancel all of them. Expiry tasks hold only a `Weak`
//! reference to the store state: dropping the last store handle aborts
//! every pending timer instead of letting the timers keep the store
//! alive.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use gyanguru_core::config::NotificationConfig;

use super::errors::ToastError;
use super::events::ToastEvent;
use super::types::{DismissReason, Toast, ToastSeverity};

/// Default capacity of the event broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 32;

/// Interface for the toast notification store.
#[async_trait]
pub trait ToastService: Send + Sync {
    /// Admits a toast and arms its expiry timer.
    ///
    /// Returns the fresh id of the admitted toast. Fails only with
    /// [`ToastError::ShutDown`] once the store has been torn down.
    async fn post(&self, message: &str, severity: ToastSeverity) -> Result<Uuid, ToastError>;

    /// Removes the toast with the given id and cancels its expiry timer.
    ///
    /// Idempotent: dismissing an unknown or already-removed id is a
    /// silent no-op, which resolves the race between user dismissal and
    /// timer expiry.
    async fn dismiss(&self, toast_id: Uuid);

    /// Returns the active toasts in admission order.
    async fn active_toasts(&self) -> Vec<Toast>;

    /// Subscribes to store events ([`ToastEvent`]).
    fn subscribe(&self) -> broadcast::Receiver<ToastEvent>;

    /// Tears the store down: cancels every pending expiry timer, clears
    /// the active list, and refuses further posts.
    async fn shutdown(&self);
}

struct ToastState {
    /// Active toasts in admission order.
    active: RwLock<Vec<Toast>>,
    /// Pending expiry timers, keyed by toast id.
    expiry_tasks: Mutex<HashMap<Uuid, JoinHandle<()>>>,
    events: broadcast::Sender<ToastEvent>,
    display_duration: Duration,
    shut_down: AtomicBool,
}

impl ToastState {
    /// Removes a toast from the active list and publishes the dismissal.
    ///
    /// `cancel_timer` is false on the expiry path, where the timer task
    /// is the caller and only its map entry needs dropping.
    fn remove_toast(&self, toast_id: Uuid, reason: DismissReason, cancel_timer: bool) {
        let handle = self
            .expiry_tasks
            .lock()
            .expect("expiry task map poisoned")
            .remove(&toast_id);
        if cancel_timer {
            if let Some(handle) = handle {
                handle.abort();
            }
        }

        let removed = {
            let mut active = self.active.write().expect("active toast list poisoned");
            active
                .iter()
                .position(|t| t.id == toast_id)
                .map(|idx| active.remove(idx))
        };
        if removed.is_some() {
            debug!("Toast {} removed ({:?})", toast_id, reason);
            self.publish(ToastEvent::Dismissed { toast_id, reason });
        }
    }

    fn publish(&self, event: ToastEvent) {
        if let Err(err) = self.events.send(event) {
            debug!("No subscribers for toast event: {:?}", err.0);
        }
    }

    fn abort_pending_timers(&self) {
        let mut tasks = self.expiry_tasks.lock().expect("expiry task map poisoned");
        for (_, handle) in tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for ToastState {
    fn drop(&mut self) {
        self.abort_pending_timers();
    }
}

/// Default implementation of the toast store.
///
/// One instance lives for the lifetime of an authenticated session.
pub struct DefaultToastService {
    state: Arc<ToastState>,
}

impl DefaultToastService {
    /// Creates a new store with the configured display duration.
    pub fn new(config: &NotificationConfig, event_capacity: usize) -> Self {
        let (events, _) = broadcast::channel(event_capacity);
        Self {
            state: Arc::new(ToastState {
                active: RwLock::new(Vec::new()),
                expiry_tasks: Mutex::new(HashMap::new()),
                events,
                display_duration: Duration::from_millis(config.display_duration_ms),
                shut_down: AtomicBool::new(false),
            }),
        }
    }
}

#[async_trait]
impl ToastService for DefaultToastService {
    async fn post(&self, message: &str, severity: ToastSeverity) -> Result<Uuid, ToastError> {
        if self.state.shut_down.load(Ordering::SeqCst) {
            return Err(ToastError::ShutDown);
        }

        let toast = Toast::new(message, severity);
        let toast_id = toast.id;
        self.state
            .active
            .write()
            .expect("active toast list poisoned")
            .push(toast.clone());

        let weak_state: Weak<ToastState> = Arc::downgrade(&self.state);
        let display_duration = self.state.display_duration;
        {
            // Hold the map lock across spawn + insert so the timer cannot
            // fire before its handle is registered.
            let mut tasks = self
                .state
                .expiry_tasks
                .lock()
                .expect("expiry task map poisoned");
            // Anchor the expiry deadline at post time, not at the task's
            // first poll.
            let expiry_timer = tokio::time::sleep(display_duration);
            let handle = tokio::spawn(async move {
                expiry_timer.await;
                if let Some(state) = weak_state.upgrade() {
                    state.remove_toast(toast_id, DismissReason::Expired, false);
                }
            });
            tasks.insert(toast_id, handle);
        }

        self.state.publish(ToastEvent::Posted { toast });
        info!("Toast {} posted ({}): {}", toast_id, severity, message);
        Ok(toast_id)
    }

    async fn dismiss(&self, toast_id: Uuid) {
        self.state.remove_toast(toast_id, DismissReason::ByUser, true);
    }

    async fn active_toasts(&self) -> Vec<Toast> {
        self.state
            .active
            .read()
            .expect("active toast list poisoned")
            .clone()
    }

    fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.state.events.subscribe()
    }

    async fn shutdown(&self) {
        self.state.shut_down.store(true, Ordering::SeqCst);
        self.state.abort_pending_timers();
        self.state
            .active
            .write()
            .expect("active toast list poisoned")
            .clear();
        info!("Toast store shut down");
    }
}
