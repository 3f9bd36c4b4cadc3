//! JSON bodies exchanged with the remote auth backend.
//!
//! DESIGN
//! ======
//! The backend answers with loosely shaped records (`authenticated` plus an
//! optional `user`, `success` plus an optional URL). Each response type has a
//! single conversion into a tagged result so call sites never probe optional
//! fields themselves.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::backend::UserLookup;
use crate::error::BackendError;
use crate::state::User;

/// Body of `GET auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl CurrentUserResponse {
    /// # Errors
    ///
    /// Returns [`BackendError::Malformed`] when the backend claims an
    /// authenticated session without describing its user.
    pub fn into_lookup(self) -> Result<UserLookup, BackendError> {
        match (self.authenticated, self.user) {
            (true, Some(user)) => Ok(UserLookup::Authenticated(user)),
            (true, None) => Err(BackendError::Malformed("authenticated without user".to_owned())),
            (false, _) => Ok(UserLookup::Unauthenticated),
        }
    }
}

/// Body sent to `POST auth/login` and `POST auth/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnToRequest {
    #[serde(rename = "returnTo")]
    pub return_to: String,
}

/// Body of `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "loginUrl", alias = "login_url", default)]
    pub login_url: Option<String>,
}

impl LoginResponse {
    /// # Errors
    ///
    /// Returns [`BackendError::Rejected`] for `success: false` and
    /// [`BackendError::Malformed`] when no login URL accompanies success.
    pub fn into_redirect(self) -> Result<String, BackendError> {
        if !self.success {
            return Err(BackendError::Rejected("login"));
        }
        match self.login_url {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(BackendError::Malformed("login succeeded without loginUrl".to_owned())),
        }
    }
}

/// Body of `POST auth/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
    #[serde(rename = "logoutUrl", alias = "logout_url", default)]
    pub logout_url: Option<String>,
}

impl LogoutResponse {
    /// # Errors
    ///
    /// Returns [`BackendError::Rejected`] for `success: false`.
    pub fn into_redirect(self) -> Result<Option<String>, BackendError> {
        if !self.success {
            return Err(BackendError::Rejected("logout"));
        }
        Ok(self.logout_url.filter(|url| !url.trim().is_empty()))
    }
}

/// Parse a response body, mapping decode failures to [`BackendError::Malformed`].
///
/// # Errors
///
/// Returns [`BackendError::Malformed`] when `body` is not valid JSON for `T`.
pub fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))
}
