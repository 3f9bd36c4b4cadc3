//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so settings are
//! baked in from `KNOWLEDGE_CHAT_*` variables when the bundle is compiled.
//! Resolution goes through a lookup function so tests can supply values
//! without touching the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::SessionConfig;

pub const API_URL_VAR: &str = "KNOWLEDGE_CHAT_API_URL";
pub const LOGIN_RETURN_PATH_VAR: &str = "KNOWLEDGE_CHAT_LOGIN_RETURN_PATH";
pub const LOGOUT_RETURN_PATH_VAR: &str = "KNOWLEDGE_CHAT_LOGOUT_RETURN_PATH";
pub const TOKEN_KEY_VAR: &str = "KNOWLEDGE_CHAT_TOKEN_KEY";
pub const LOG_LEVEL_VAR: &str = "KNOWLEDGE_CHAT_LOG_LEVEL";

const DEFAULT_API_URL: &str = "/api";
const DEFAULT_LOGIN_RETURN_PATH: &str = "/auth/callback";
const DEFAULT_LOGOUT_RETURN_PATH: &str = "/login";
const DEFAULT_TOKEN_KEY: &str = "knowledge_chat_token";

/// Settings for the REST backend, auth redirects, token mirror and logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Path (or absolute URL) the SSO provider returns to after login.
    pub login_return_path: String,
    /// Path (or absolute URL) the browser lands on after logout.
    pub logout_return_path: String,
    /// `localStorage` key holding the mirrored session token.
    pub token_storage_key: String,
    pub log_level: log::Level,
}

impl ClientConfig {
    /// Resolve configuration from `lookup`, falling back to defaults for
    /// missing, blank, or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_owned())
                .filter(|raw| !raw.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let api_base_url = value(API_URL_VAR, DEFAULT_API_URL).trim_end_matches('/').to_owned();
        let log_level = lookup(LOG_LEVEL_VAR)
            .and_then(|raw| raw.trim().parse::<log::Level>().ok())
            .unwrap_or(log::Level::Info);

        Self {
            api_base_url,
            login_return_path: value(LOGIN_RETURN_PATH_VAR, DEFAULT_LOGIN_RETURN_PATH),
            logout_return_path: value(LOGOUT_RETURN_PATH_VAR, DEFAULT_LOGOUT_RETURN_PATH),
            token_storage_key: value(TOKEN_KEY_VAR, DEFAULT_TOKEN_KEY),
            log_level,
        }
    }

    /// Configuration baked in when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let raw = match key {
                API_URL_VAR => option_env!("KNOWLEDGE_CHAT_API_URL"),
                LOGIN_RETURN_PATH_VAR => option_env!("KNOWLEDGE_CHAT_LOGIN_RETURN_PATH"),
                LOGOUT_RETURN_PATH_VAR => option_env!("KNOWLEDGE_CHAT_LOGOUT_RETURN_PATH"),
                TOKEN_KEY_VAR => option_env!("KNOWLEDGE_CHAT_TOKEN_KEY"),
                LOG_LEVEL_VAR => option_env!("KNOWLEDGE_CHAT_LOG_LEVEL"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Full URL for a backend route such as `auth/me`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Redirect targets for the session manager, made absolute against `origin`.
    #[must_use]
    pub fn session_config(&self, origin: &str) -> SessionConfig {
        SessionConfig {
            login_return_to: absolute_url(origin, &self.login_return_path),
            logout_return_to: absolute_url(origin, &self.logout_return_path),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn absolute_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}
