//! Browser `localStorage` mirror of the opaque session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the REST layer reads this token (to attach a bearer header) and the
//! auth-callback page writes it. Identity is never derived from it: the
//! session manager trusts the backend's answer alone.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; outside the browser
//! every call is a no-op.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

/// Read the mirrored token stored under `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `token` under `key`. Blank tokens clear the entry instead.
pub fn save(key: &str, token: &str) {
    let token = token.trim();
    if token.is_empty() {
        clear(key);
        return;
    }
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(key, token).is_err() {
                log::warn!("could not persist session token");
            }
        }
    }
}

/// Remove the mirrored token.
pub fn clear(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// Header value for a mirrored token.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
