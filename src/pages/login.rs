//! Sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
#[cfg(feature = "hydrate")]
use crate::components::toast::{show_error, show_success};
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::state::form::{Field, Rule};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required];

/// Hold the page long enough for the success toast to register before
/// navigating on.
#[cfg(feature = "hydrate")]
const POST_SUBMIT_NAVIGATE_DELAY_MS: u64 = 2000;

/// Credentials to submit, if every field validates.
fn signin_payload(email: &Field, password: &Field) -> Option<(String, String)> {
    (email.is_valid() && password.is_valid())
        .then(|| (email.value.clone(), password.value.clone()))
}

/// Sign-in form; the landing page for signed-out visitors.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(Field::new("email", EMAIL_RULES));
    let password = RwSignal::new(Field::new("password", PASSWORD_RULES));
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = email.with(|e| password.with(|p| signin_payload(e, p)));
        let Some((email_value, password_value)) = payload else {
            email.update(|f| f.touched = true);
            password.update(|f| f.touched = true);
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::login(&email_value, &password_value).await {
                    Ok(api::LoginOutcome::Success(user)) => {
                        session.update(|s| s.establish(user));
                        show_success(toasts, "User logged in successfully");
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            POST_SUBMIT_NAVIGATE_DELAY_MS,
                        ))
                        .await;
                        navigate("/users", NavigateOptions::default());
                    }
                    Ok(api::LoginOutcome::Blocked) => {
                        show_error(toasts, "This user is blocked");
                        busy.set(false);
                    }
                    Ok(api::LoginOutcome::BadCredentials) => {
                        show_error(toasts, "Wrong login or password");
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("login request failed: {error}");
                        show_error(toasts, "Could not reach the server");
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, toasts, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign in"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        field=email
                        label="Email Address"
                        input_type="email"
                        placeholder="Enter email address"
                    />
                    <TextField
                        field=password
                        label="Password"
                        placeholder="*****"
                        reveal=show_password
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href="/register">"Don't have an account?"</a>
                </p>
            </div>
        </main>
    }
}
