//! Sign-up page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

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

const NAME_RULES: &[Rule] = &[Rule::Required];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLen(8)];

#[cfg(feature = "hydrate")]
const POST_SUBMIT_NAVIGATE_DELAY_MS: u64 = 2000;

/// Account details to submit, if every field validates.
fn signup_payload(
    name: &Field,
    email: &Field,
    password: &Field,
) -> Option<(String, String, String)> {
    (name.is_valid() && email.is_valid() && password.is_valid())
        .then(|| (name.value.clone(), email.value.clone(), password.value.clone()))
}

/// Sign-up form. A successful registration signs the new account in
/// directly.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(Field::new("name", NAME_RULES));
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
        let payload = name.with(|n| email.with(|e| password.with(|p| signup_payload(n, e, p))));
        let Some((name_value, email_value, password_value)) = payload else {
            name.update(|f| f.touched = true);
            email.update(|f| f.touched = true);
            password.update(|f| f.touched = true);
            return;
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::register(&name_value, &email_value, &password_value).await {
                    Ok(api::RegisterOutcome::Created(user)) => {
                        session.update(|s| s.establish(user));
                        show_success(toasts, "Your account has been created");
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            POST_SUBMIT_NAVIGATE_DELAY_MS,
                        ))
                        .await;
                        navigate("/users", NavigateOptions::default());
                    }
                    Ok(api::RegisterOutcome::AlreadyRegistered) => {
                        show_error(toasts, "User already registered");
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("register request failed: {error}");
                        show_error(toasts, "Could not reach the server");
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, toasts, name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Sign up"</h1>
                <form class="auth-form" novalidate=true on:submit=on_submit>
                    <TextField
                        field=name
                        label="Name*"
                        placeholder="Enter your name"
                    />
                    <TextField
                        field=email
                        label="Email Address*"
                        input_type="email"
                        placeholder="Enter email address"
                    />
                    <TextField
                        field=password
                        label="Password*"
                        placeholder="*****"
                        reveal=show_password
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    <a href="/login">"Already have an account?"</a>
                </p>
            </div>
        </main>
    }
}
