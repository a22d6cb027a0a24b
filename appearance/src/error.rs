//! Errors raised by host storage backends.

/// Failure reported by a [`crate::KeyValueStorage`] backend.
///
/// These never reach controller callers: [`crate::PreferenceStore`] logs and
/// absorbs them so the session continues with in-memory state only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppearanceError {
    /// Storage is disabled or does not exist in this environment.
    #[error("preference storage unavailable")]
    StorageUnavailable,
    /// The backend raised an error while reading.
    #[error("preference read failed: {0}")]
    ReadFailed(String),
    /// The backend refused the write (quota exceeded, private mode, ...).
    #[error("preference write rejected: {0}")]
    WriteRejected(String),
}
