use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{DismissReason, Toast};

/// Events published by the toast store for the rendering layer.
///
/// The renderer subscribes via [`super::ToastService::subscribe`] and is
/// the only consumer; the store never waits on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToastEvent {
    Posted {
        toast: Toast,
    },
    Dismissed {
        toast_id: Uuid,
        reason: DismissReason,
    },
}
