//! REST API client for the remote user-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with
//! same-origin credentials. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since the endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures surface as [`ApiError`] instead of
//! being swallowed; expected non-2xx statuses (wrong password, duplicate
//! registration, blocked account) map to outcome enum variants so call
//! sites never branch on raw status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{BlockRequest, LoginRequest, RegisterRequest};

/// Backend origin prefixed to every request path.
///
/// Empty (same-origin relative paths) unless `USERBOARD_API_ORIGIN` is
/// set at build time.
#[cfg(feature = "hydrate")]
const API_ORIGIN: &str = match option_env!("USERBOARD_API_ORIGIN") {
    Some(origin) => origin,
    None => "",
};

/// Failure of an API call, as distinct from an expected non-2xx outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body could not be decoded as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The server answered with a status no outcome maps to.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
    /// Called outside the browser (SSR render).
    #[error("not available on server")]
    Unavailable,
}

/// Result of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; carries the signed-in user payload.
    Success(User),
    /// 401: unknown email or wrong password.
    BadCredentials,
    /// 403: the account exists but is blocked.
    Blocked,
}

/// Result of a registration attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Account created; carries the new user payload.
    Created(User),
    /// 400: the email is already registered.
    AlreadyRegistered,
}

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint(origin: &str) -> String {
    format!("{origin}/api/users")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(origin: &str) -> String {
    format!("{origin}/api/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn block_endpoint(origin: &str) -> String {
    format!("{origin}/api/users/block")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_endpoint(origin: &str, id: &str) -> String {
    format!("{origin}/api/users/{id}")
}

/// Map an expected non-success login status to its outcome.
///
/// 401 and 403 are screen-level outcomes; anything else is left for the
/// unexpected-status error channel.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_outcome(status: u16) -> Option<LoginOutcome> {
    match status {
        401 => Some(LoginOutcome::BadCredentials),
        403 => Some(LoginOutcome::Blocked),
        _ => None,
    }
}

/// Map an expected non-success registration status to its outcome.
#[cfg(any(test, feature = "hydrate"))]
fn register_failure_outcome(status: u16) -> Option<RegisterOutcome> {
    (status == 400).then_some(RegisterOutcome::AlreadyRegistered)
}

/// Attempt to sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the success
/// body cannot be decoded, or the status is none of 200/401/403.
pub async fn login(email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(&login_endpoint(API_ORIGIN))
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match resp.status() {
            200 => {
                let user: User = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(LoginOutcome::Success(user))
            }
            status => login_failure_outcome(status).ok_or(ApiError::UnexpectedStatus(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/users`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the success
/// body cannot be decoded, or the status is neither 200 nor 400.
pub async fn register(name: &str, email: &str, password: &str) -> Result<RegisterOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = RegisterRequest {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&users_endpoint(API_ORIGIN))
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match resp.status() {
            200 => {
                let user: User = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(RegisterOutcome::Created(user))
            }
            status => register_failure_outcome(status).ok_or(ApiError::UnexpectedStatus(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch every user via `GET /api/users`.
///
/// # Errors
///
/// Returns [`ApiError`] when the request cannot be sent, the status is
/// not successful, or the body cannot be decoded.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&users_endpoint(API_ORIGIN))
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::UnexpectedStatus(resp.status()));
        }
        resp.json::<Vec<User>>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Set a user's account status via `POST /api/users/block`.
///
/// `status` is the target state: `false` blocks, `true` unblocks. Any
/// settled HTTP response counts as done regardless of its status code;
/// bulk callers refresh the row list afterwards either way.
///
/// # Errors
///
/// Returns [`ApiError`] only when no response was produced at all.
pub async fn set_blocked(id: &str, status: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = BlockRequest { id: id.to_owned(), status };
        gloo_net::http::Request::post(&block_endpoint(API_ORIGIN))
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(ApiError::Unavailable)
    }
}

/// Delete a user via `DELETE /api/users/:id`.
///
/// Any settled HTTP response counts as done regardless of its status
/// code, matching [`set_blocked`].
///
/// # Errors
///
/// Returns [`ApiError`] only when no response was produced at all.
pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::delete(&delete_endpoint(API_ORIGIN, id))
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
