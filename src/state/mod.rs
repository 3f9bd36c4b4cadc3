//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Only auth exists today; the chat and documentation views
//! are stateless shells.

pub mod auth;
