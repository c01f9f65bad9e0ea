//! Shared UI building blocks.

pub mod navbar;
pub mod text_field;
pub mod toast;
pub mod user_table;
