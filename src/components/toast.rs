//! Toast notifications: queue helpers and the fixed overlay that
//! renders them.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_DISMISS_MS: u64 = 5000;

/// Queue a success toast that dismisses itself.
pub fn show_success(toasts: RwSignal<ToastState>, message: &str) {
    push_toast(toasts, ToastKind::Success, message);
}

/// Queue an error toast that dismisses itself.
pub fn show_error(toasts: RwSignal<ToastState>, message: &str) {
    push_toast(toasts, ToastKind::Error, message);
}

fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = 0;
    toasts.update(|state| {
        id = match kind {
            ToastKind::Success => state.success(message),
            ToastKind::Error => state.error(message),
        };
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed overlay rendering the toast queue, newest at the bottom.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let modifier = match toast.kind {
                            ToastKind::Success => "toast--success",
                            ToastKind::Error => "toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {modifier}")>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|state| state.dismiss(id))
                                >
                                    "\u{d7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
