//! Wire DTOs for the user-management API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips
//! stay lossless; the session and table layers reuse them unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A managed user as returned by `GET /api/users`.
///
/// The same payload comes back from login and registration and is what
/// gets persisted as the session user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address; doubles as the login identifier.
    pub email: String,
    /// Account status; `true` is active, `false` is blocked.
    pub status: bool,
    /// ISO 8601 timestamp of account creation, if known.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 timestamp of the most recent login, if known.
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Payload for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/users` (registration).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /api/users/block`.
///
/// `status` carries the target account status: `false` blocks the user,
/// `true` unblocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub id: String,
    pub status: bool,
}
