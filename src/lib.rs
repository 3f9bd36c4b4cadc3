//! # knowledge-chat
//!
//! Leptos + WASM web client for the Universal Knowledge Chatbot.
//!
//! This crate contains the application shell, pages, route guarding, and the
//! browser-side adapters (REST auth backend, token mirror, navigator) that
//! plug into the framework-agnostic `session` crate. Browser-only code is
//! gated behind the `csr` feature so the rest compiles and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = config::ClientConfig::from_build_env().log_level;
    let _ = console_log::init_with_level(level);
    leptos::mount::mount_to_body(app::App);
}
