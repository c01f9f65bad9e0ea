//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three screens: sign-in (`login`), sign-up (`register`), and the
//! user-management table (`users`). The first two are public; the users
//! page requires a restored session and redirects to sign-in otherwise.

pub mod login;
pub mod register;
pub mod users;
