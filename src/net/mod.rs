//! Networking modules for the user-management HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls against the configured backend origin and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
