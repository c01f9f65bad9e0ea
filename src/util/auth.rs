//! Route guard for the signed-in area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to the sign-in page once the session resolves to
/// signed-out. Pages that require a signed-in user call this on mount;
/// the effect stays armed, so a session cleared later (self-block,
/// self-delete) also redirects.
pub fn install_signin_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
