//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionManager`] is the only writer of [`AuthState`]. This module
//! mirrors its notifications into an `RwSignal` so route guards and
//! user-aware components re-render, and wires the window focus event to
//! session revalidation for as long as the application shell is mounted.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use session::{SessionManager, SubscriptionId};

pub use session::{AuthState, User};

use crate::config::ClientConfig;
use crate::net::api::HttpAuthBackend;
use crate::net::navigator::{BrowserNavigator, page_origin};

/// Context handle giving components access to the session manager.
///
/// The manager itself is `!Send`, so it lives in local arena storage and is
/// looked up on use.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    manager: StoredValue<SessionManager, LocalStorage>,
    auth: RwSignal<AuthState>,
}

impl SessionHandle {
    /// The manager, or `None` once the owning shell has been torn down.
    pub fn manager(&self) -> Option<SessionManager> {
        self.manager.try_get_value()
    }

    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    /// Run a session operation on the local executor.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(SessionManager) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        match self.manager() {
            Some(manager) => leptos::task::spawn_local(op(manager)),
            None => log::debug!("session released; dropping operation"),
        }
    }

    fn release(&self, subscription: SubscriptionId) {
        if let Some(manager) = self.manager() {
            manager.unsubscribe(subscription);
            manager.dispose();
        }
    }
}

/// Build the browser session manager from client configuration.
pub fn build_session_manager(config: &ClientConfig) -> SessionManager {
    SessionManager::new(
        Rc::new(HttpAuthBackend::new(config.clone())),
        Rc::new(BrowserNavigator),
        config.session_config(&page_origin()),
    )
}

/// Provide the session to the component tree.
///
/// Provides both a [`SessionHandle`] and the `RwSignal<AuthState>` mirror as
/// context. In the browser this also starts the initial revalidation and
/// listens for window focus; both stop when the owner is cleaned up.
pub fn provide_session(manager: SessionManager) -> SessionHandle {
    let auth = RwSignal::new(manager.state());
    let subscription = manager.subscribe(move |state| {
        let _ = auth.try_set(state.clone());
    });

    let handle = SessionHandle { manager: StoredValue::new_local(manager), auth };
    provide_context(handle);
    provide_context(auth);

    #[cfg(feature = "csr")]
    {
        handle.spawn(|manager| async move { manager.initialize().await });

        let focus = window_event_listener(leptos::ev::focus, move |_| {
            handle.spawn(|manager| async move { manager.handle_focus().await });
        });
        on_cleanup(move || focus.remove());
    }

    on_cleanup(move || handle.release(subscription));
    handle
}

/// Fetch the session handle provided by the application shell.
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}
