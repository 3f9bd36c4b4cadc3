//! Seams between the session manager and the outside world.
//!
//! DESIGN
//! ======
//! The manager depends on two collaborators only: the remote auth backend,
//! which is the sole source of truth for session validity, and a navigator
//! that performs full-page redirects. Both are traits so the browser
//! implementations can be swapped for scripted ones in tests.

use crate::error::BackendError;
use crate::state::User;

/// Answer to "who is the current user".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserLookup {
    Authenticated(User),
    Unauthenticated,
}

impl UserLookup {
    /// Collapse the lookup into the user the session should hold.
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}

/// RPC surface of the remote auth backend.
///
/// Futures are `!Send`: the client runs on a single-threaded event loop.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// Ask the backend who owns the ambient session credential.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the backend is unreachable or answers
    /// with something other than a well-formed lookup.
    async fn current_user(&self) -> Result<UserLookup, BackendError>;

    /// Start the external login flow and return the URL to send the browser to.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when no login URL could be produced.
    async fn begin_login(&self, return_to: &str) -> Result<String, BackendError>;

    /// Terminate the session, returning an optional provider logout URL.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] when the backend did not confirm the logout.
    async fn end_session(&self, return_to: &str) -> Result<Option<String>, BackendError>;
}

/// Performs full-page navigation away from the application.
pub trait Navigator {
    fn navigate(&self, url: &str);
}
