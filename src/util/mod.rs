//! Browser plumbing: local storage and route guards.

pub mod auth;
pub mod storage;
