//! Local-storage persistence for the signed-in user.
//!
//! The session payload lives under a single key as serialized JSON.
//! Storage failures (disabled storage, quota, malformed payloads) are
//! non-fatal: reads fall back to `None` and writes are dropped.
//! Requires a browser environment; off-browser every call is a no-op.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "current_user";

/// Read the stored session user, if one is present and decodes.
pub fn read_session_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session user.
pub fn write_session_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(raw) = serde_json::to_string(user) {
                    let _ = storage.set_item(SESSION_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove any stored session user.
pub fn clear_session_user() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}
