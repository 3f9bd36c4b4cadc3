//! Session manager: owns the current user and loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! One manager exists per mounted application shell. It is the only writer of
//! [`AuthState`]; everything else reads snapshots or subscribes to changes.
//!
//! ERROR HANDLING
//! ==============
//! Each operation has its own failure policy and its own log tag:
//!
//! | operation        | clears user | returns error | tag                                |
//! |------------------|-------------|---------------|------------------------------------|
//! | `initialize`     | yes         | no            | `failed to initialize session`     |
//! | `login`          | no          | yes           | `login failed`                     |
//! | `logout`         | yes         | yes           | `logout failed`                    |
//! | `renew_token`    | no          | yes           | `token renewal failed`             |
//! | `refresh_user`   | yes         | no            | `failed to refresh user`           |
//! | `handle_focus`   | yes         | no            | `failed to refresh user on focus`  |
//!
//! CONCURRENCY
//! ===========
//! Single-threaded event loop. Every operation suspends once, at the backend
//! call. Overlapping lookups are last-write-wins on the user. A counter of
//! in-flight lookups is bumped before the first suspension point so a focus
//! event arriving mid-lookup is ignored instead of racing it.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::{debug, error, info, trace};

use crate::backend::{AuthBackend, Navigator, UserLookup};
use crate::error::{BackendError, SessionError};
use crate::observer::{SubscriptionId, Subscribers};
use crate::state::{AuthState, User};

/// Absolute URLs the backend should send the browser back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the SSO provider returns after a successful login.
    pub login_return_to: String,
    /// Where the browser lands after the provider-side logout.
    pub logout_return_to: String,
}

/// Shared handle to the session. Clones refer to the same state.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
}

struct Inner {
    backend: Rc<dyn AuthBackend>,
    navigator: Rc<dyn Navigator>,
    config: SessionConfig,
    state: RefCell<AuthState>,
    subscribers: Subscribers,
    lookups_in_flight: Cell<u32>,
    initialized: Cell<bool>,
    disposed: Cell<bool>,
}

/// Counts a backend lookup as in flight until dropped.
struct InFlight<'a>(&'a Cell<u32>);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a Cell<u32>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}

impl SessionManager {
    /// Create a manager in the initializing state (no user, loading).
    #[must_use]
    pub fn new(backend: Rc<dyn AuthBackend>, navigator: Rc<dyn Navigator>, config: SessionConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                navigator,
                config,
                state: RefCell::new(AuthState::initializing()),
                subscribers: Subscribers::default(),
                lookups_in_flight: Cell::new(0),
                initialized: Cell::new(false),
                disposed: Cell::new(false),
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register `callback` to receive every new state after it is committed.
    pub fn subscribe(&self, callback: impl Fn(&AuthState) + 'static) -> SubscriptionId {
        self.inner.subscribers.add(Rc::new(callback))
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.remove(id)
    }

    /// Detach the manager from its owning UI.
    ///
    /// Operations still in flight run to completion and return their results,
    /// but no longer write state, notify anyone, or redirect the browser.
    pub fn dispose(&self) {
        if self.inner.disposed.replace(true) {
            return;
        }
        self.inner.subscribers.clear();
        debug!("session disposed");
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Resolve the initial session. Only the first call does anything.
    ///
    /// Never fails: an unreachable backend leaves the session signed out.
    pub async fn initialize(&self) {
        if self.inner.initialized.replace(true) {
            debug!("session already initialized; ignoring");
            return;
        }
        self.commit(|s| s.loading = true);

        let user = match self.lookup().await {
            Ok(lookup) => lookup.into_user(),
            Err(e) => {
                error!("failed to initialize session: {e}");
                None
            }
        };
        self.commit(|s| {
            s.user = user;
            s.loading = false;
        });
    }

    /// Start the external login flow and redirect the browser to it.
    ///
    /// On success the page is expected to unload, so `loading` stays set.
    ///
    /// # Errors
    ///
    /// Returns the backend failure when no login URL could be obtained; in
    /// that case `loading` is cleared first.
    pub async fn login(&self) -> Result<(), SessionError> {
        self.commit(|s| s.loading = true);

        match self.inner.backend.begin_login(&self.inner.config.login_return_to).await {
            Ok(url) => {
                info!("redirecting to identity provider");
                self.redirect(&url);
                Ok(())
            }
            Err(e) => {
                error!("login failed: {e}");
                self.commit(|s| s.loading = false);
                Err(e.into())
            }
        }
    }

    /// Terminate the session. The user is forgotten locally whatever the
    /// backend answers.
    ///
    /// # Errors
    ///
    /// Returns the backend failure after the local state has been cleared.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.commit(|s| s.loading = true);

        let result = self.inner.backend.end_session(&self.inner.config.logout_return_to).await;
        self.commit(|s| {
            s.user = None;
            s.loading = false;
        });

        match result {
            Ok(Some(url)) => {
                self.redirect(&url);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                error!("logout failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Re-confirm the session in the background without touching `loading`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Unauthenticated`] when the backend reports no
    /// session, or the backend failure. Either way the known user is kept.
    pub async fn renew_token(&self) -> Result<(), SessionError> {
        let err = match self.lookup().await {
            Ok(UserLookup::Authenticated(user)) => {
                self.commit(|s| s.user = Some(user));
                return Ok(());
            }
            Ok(UserLookup::Unauthenticated) => SessionError::Unauthenticated,
            Err(e) => SessionError::Backend(e),
        };
        error!("token renewal failed: {err}");
        Err(err)
    }

    /// Re-fetch the user; anything short of a confirmed session signs out.
    pub async fn refresh_user(&self) {
        self.revalidate("failed to refresh user").await;
    }

    /// React to the window regaining focus.
    ///
    /// Ignored while loading or while another lookup is already in flight.
    pub async fn handle_focus(&self) {
        if self.is_loading() || self.inner.lookups_in_flight.get() > 0 {
            debug!("focus revalidation skipped; session busy");
            return;
        }
        self.revalidate("failed to refresh user on focus").await;
    }

    async fn revalidate(&self, failure_tag: &'static str) {
        let user = match self.lookup().await {
            Ok(lookup) => lookup.into_user(),
            Err(e) => {
                error!("{failure_tag}: {e}");
                None
            }
        };
        if user.is_none() && self.is_authenticated() {
            info!("session no longer valid; signing out locally");
        }
        self.commit(|s| s.user = user);
    }

    async fn lookup(&self) -> Result<UserLookup, BackendError> {
        let _in_flight = InFlight::enter(&self.inner.lookups_in_flight);
        self.inner.backend.current_user().await
    }

    /// Navigate away unless the owning UI has already been torn down.
    fn redirect(&self, url: &str) {
        if self.inner.disposed.get() {
            debug!("session disposed; skipping redirect to {url}");
            return;
        }
        self.inner.navigator.navigate(url);
    }

    /// Apply `update` and notify subscribers if the state changed.
    fn commit(&self, update: impl FnOnce(&mut AuthState)) {
        if self.inner.disposed.get() {
            trace!("session disposed; dropping state write");
            return;
        }
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            let before = state.clone();
            update(&mut state);
            if *state == before {
                return;
            }
            state.clone()
        };
        self.inner.subscribers.notify(&snapshot);
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("state", &*self.inner.state.borrow())
            .field("config", &self.inner.config)
            .field("lookups_in_flight", &self.inner.lookups_in_flight.get())
            .field("subscribers", &self.inner.subscribers.len())
            .field("disposed", &self.inner.disposed.get())
            .finish_non_exhaustive()
    }
}
