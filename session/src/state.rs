//! Session snapshot and user identity types.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the auth backend.
///
/// Owned by the session and replaced wholesale on every revalidation.
/// Deserializes through [`RawUser`] so either name key, or both, and a null
/// `emailVerified` are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUser")]
pub struct User {
    /// Backend-assigned user identifier.
    pub id: String,
    /// Primary email address.
    pub email: String,
    /// Human-readable name shown in the UI.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Avatar image URL, if the identity provider supplied one.
    #[serde(rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether the identity provider has verified `email`.
    #[serde(rename = "emailVerified")]
    pub email_verified: bool,
}

/// User as the backend may send it.
#[derive(Deserialize)]
struct RawUser {
    id: String,
    email: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "displayName", alias = "display_name", default)]
    display_name: Option<String>,
    #[serde(rename = "avatarUrl", alias = "avatar_url", default)]
    avatar_url: Option<String>,
    #[serde(rename = "emailVerified", alias = "email_verified", default)]
    email_verified: Option<bool>,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id,
            email: raw.email,
            display_name: raw.display_name.or(raw.name).unwrap_or_default(),
            avatar_url: raw.avatar_url,
            email_verified: raw.email_verified.unwrap_or(false),
        }
    }
}

/// Authentication state tracking the current user and loading status.
///
/// `is_authenticated` is derived from `user` on every read and is never
/// stored, so the two cannot drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State of a freshly mounted session: no user, revalidation pending.
    #[must_use]
    pub fn initializing() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initializing()
    }
}
