//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical gating: a placeholder while the
//! session is settling, content once authenticated, `/login` otherwise.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

pub const LOGIN_ROUTE: &str = "/login";
pub const HOME_ROUTE: &str = "/";

/// What a protected route should render for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// The session answer is not settled yet.
    Loading,
    /// Authenticated: render protected content.
    Render,
    /// Definitively signed out: send to the login page.
    Redirect,
}

/// Decide how a protected route renders. Loading wins over everything else.
pub fn gate_decision(state: &AuthState) -> GateDecision {
    if state.loading {
        GateDecision::Loading
    } else if state.is_authenticated() {
        GateDecision::Render
    } else {
        GateDecision::Redirect
    }
}

/// Where the auth-callback page sends the user once the session has settled.
/// `None` while still loading.
pub fn callback_destination(state: &AuthState) -> Option<&'static str> {
    match gate_decision(state) {
        GateDecision::Loading => None,
        GateDecision::Render => Some(HOME_ROUTE),
        GateDecision::Redirect => Some(LOGIN_ROUTE),
    }
}
