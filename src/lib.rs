//! # userboard
//!
//! Leptos + WASM front-end for a small user-administration panel.
//! Three screens (sign-in, sign-up, user management) talk to a remote
//! HTTP user-management API; the signed-in user is mirrored to browser
//! local storage and injected into pages as reactive context.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
