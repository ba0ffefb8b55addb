//! Store adapter error model.

use thiserror::Error;

/// Result type returned by store adapters.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a pluggable store adapter.
///
/// Keep this focused on infrastructure failures (backend down, deadline hit).
/// Domain outcomes such as "no matching record" are modeled as `Ok(None)` by
/// the adapter traits, never as errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The adapter did not answer within the caller-supplied deadline.
    #[error("store timed out")]
    Timeout,

    /// The backing store rejected or could not service the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
