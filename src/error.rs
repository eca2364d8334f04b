//! Error taxonomy for the storage and upstream boundaries.
//!
//! Storage faults are always recovered locally: [`crate::SessionStore`] returns them as
//! explicit `Result`s and [`crate::HistoryManager`] swallows and logs every one, so no
//! `StoreError` ever crosses the manager boundary. Upstream faults propagate to the
//! orchestrator, which converts them into a recorded assistant error turn.

use thiserror::Error;

/// Failure inside the session store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A persisted record is missing a required field or is not valid JSON.
    #[error("malformed session record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// Filesystem unavailable, permission denied, disk full, and friends.
    #[error("session storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Opaque failure reported by the upstream model client.
///
/// The client is an external collaborator; this core never inspects the failure beyond
/// rendering it into the assistant's error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct UpstreamError(pub String);

impl UpstreamError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
