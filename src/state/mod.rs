//! Client-side application state.
//!
//! DESIGN
//! ======
//! Each concern is a plain struct with pure methods, provided to the
//! component tree as an `RwSignal` context (session, toasts) or held
//! locally by a page (forms, table). Pages mutate through
//! `signal.update(...)`, so all of the logic here is testable without a
//! DOM.

pub mod form;
pub mod session;
pub mod table;
pub mod toast;
