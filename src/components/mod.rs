//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; only pages decide which
//! routes exist.

pub mod require_auth;
pub mod session_bar;
