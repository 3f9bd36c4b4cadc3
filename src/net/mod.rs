//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session crate's backend seam over REST, and
//! `navigator` performs the full-page redirects the SSO flow needs.

pub mod api;
pub mod navigator;
