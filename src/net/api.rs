//! REST client for the remote auth backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, sending the session
//! cookie and, when one is mirrored, a bearer token.
//! Outside the browser: every call reports a transport error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, unexpected statuses and malformed bodies all become
//! [`BackendError`] values; the session manager decides per operation what
//! they mean for the UI.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use session::wire::{CurrentUserResponse, LoginResponse, LogoutResponse, parse_body};
use session::{AuthBackend, BackendError, UserLookup};

use crate::config::ClientConfig;

#[cfg(any(test, feature = "csr"))]
const ME_PATH: &str = "auth/me";
#[cfg(any(test, feature = "csr"))]
const LOGIN_PATH: &str = "auth/login";
#[cfg(any(test, feature = "csr"))]
const LOGOUT_PATH: &str = "auth/logout";

/// [`AuthBackend`] over the backend's `auth/*` REST routes.
#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    config: ClientConfig,
}

impl HttpAuthBackend {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "csr")]
    fn with_session(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        let builder = builder.credentials(web_sys::RequestCredentials::Include);
        match crate::util::token_storage::load(&self.config.token_storage_key) {
            Some(token) => builder.header("Authorization", &crate::util::token_storage::bearer_header(&token)),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    async fn post_return_to(&self, path: &str, return_to: &str) -> Result<(u16, String), BackendError> {
        let payload = session::wire::ReturnToRequest { return_to: return_to.to_owned() };
        let request = self
            .with_session(gloo_net::http::Request::post(&self.config.endpoint(path)))
            .json(&payload)
            .map_err(transport)?;
        let resp = request.send().await.map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        Ok((status, body))
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn current_user(&self) -> Result<UserLookup, BackendError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .with_session(gloo_net::http::Request::get(&self.config.endpoint(ME_PATH)))
                .send()
                .await
                .map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            let lookup = me_result(status, &body);
            if clears_token(&lookup) {
                crate::util::token_storage::clear(&self.config.token_storage_key);
            }
            lookup
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn begin_login(&self, return_to: &str) -> Result<String, BackendError> {
        #[cfg(feature = "csr")]
        {
            let (status, body) = self.post_return_to(LOGIN_PATH, return_to).await?;
            login_result(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = return_to;
            Err(unavailable())
        }
    }

    async fn end_session(&self, return_to: &str) -> Result<Option<String>, BackendError> {
        #[cfg(feature = "csr")]
        {
            let result = match self.post_return_to(LOGOUT_PATH, return_to).await {
                Ok((status, body)) => logout_result(status, &body),
                Err(e) => Err(e),
            };
            crate::util::token_storage::clear(&self.config.token_storage_key);
            result
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = return_to;
            Err(unavailable())
        }
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> BackendError {
    BackendError::Transport("not available outside the browser".to_owned())
}

#[cfg(any(test, feature = "csr"))]
fn is_unauthorized(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret an `auth/me` response. A 401/403 means "no session".
#[cfg(any(test, feature = "csr"))]
fn me_result(status: u16, body: &str) -> Result<UserLookup, BackendError> {
    if is_unauthorized(status) {
        return Ok(UserLookup::Unauthenticated);
    }
    if !is_success(status) {
        return Err(BackendError::Status(status));
    }
    parse_body::<CurrentUserResponse>(body)?.into_lookup()
}

/// A mirrored token is stale once the backend says there is no session,
/// whether by status or by `authenticated: false`.
#[cfg(any(test, feature = "csr"))]
fn clears_token(lookup: &Result<UserLookup, BackendError>) -> bool {
    matches!(lookup, Ok(UserLookup::Unauthenticated))
}

#[cfg(any(test, feature = "csr"))]
fn login_result(status: u16, body: &str) -> Result<String, BackendError> {
    if !is_success(status) {
        return Err(BackendError::Status(status));
    }
    parse_body::<LoginResponse>(body)?.into_redirect()
}

#[cfg(any(test, feature = "csr"))]
fn logout_result(status: u16, body: &str) -> Result<Option<String>, BackendError> {
    if !is_success(status) {
        return Err(BackendError::Status(status));
    }
    parse_body::<LogoutResponse>(body)?.into_redirect()
}
