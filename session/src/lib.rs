//! Client-side authentication session lifecycle.
//!
//! This crate owns the answer to "who is signed in right now, and is that
//! answer settled yet" for the web client. It never inspects credentials: the
//! remote auth backend is the only authority on session validity, reached
//! through the [`AuthBackend`] seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web client wraps a [`SessionManager`] in a reactive signal and feeds it
//! window focus events. Route guards read [`AuthState`] to choose between a
//! loading placeholder, protected content, and a login redirect.

mod backend;
mod error;
mod manager;
mod observer;
mod state;
pub mod wire;

#[cfg(test)]
mod test_support;

pub use backend::{AuthBackend, Navigator, UserLookup};
pub use error::{BackendError, SessionError};
pub use manager::{SessionConfig, SessionManager};
pub use observer::SubscriptionId;
pub use state::{AuthState, User};
