use thiserror::Error;

/// Errors surfaced by the toast store.
///
/// The store has no recoverable failure paths while alive: posting always
/// succeeds and dismissal of an unknown id is a no-op. The only error is
/// posting to a store that has already been torn down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToastError {
    #[error("toast store is shut down")]
    ShutDown,
}
