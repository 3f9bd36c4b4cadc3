//! Error types for backend calls and session operations.

/// Failure talking to the remote auth backend.
///
/// The session treats every variant the same way for state purposes; the
/// variant only changes what gets logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The request never produced a response (network error, CORS, offline).
    #[error("auth backend unreachable: {0}")]
    Transport(String),
    /// The backend answered with a non-success HTTP status.
    #[error("auth backend returned status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("malformed auth backend response: {0}")]
    Malformed(String),
    /// The backend answered `success: false` for the named operation.
    #[error("{0} rejected by auth backend")]
    Rejected(&'static str),
}

/// Error surfaced to callers of fallible [`crate::SessionManager`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The backend reports that no session exists.
    #[error("session is not authenticated")]
    Unauthenticated,
}
