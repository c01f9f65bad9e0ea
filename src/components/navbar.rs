//! Top navigation bar.

use leptos::prelude::*;

/// Fixed top bar with links to the sign-in and sign-up pages.
///
/// There is no logout control anywhere in the app; a session only ends
/// through the logout-equivalent bulk actions on the users page.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <span class="navbar__spacer"></span>
            <a class="navbar__link" href="/login">
                "Sign In"
            </a>
            <a class="navbar__link" href="/register">
                "Sign Up"
            </a>
        </header>
    }
}
