//! User administration page: the signed-in landing screen.
//!
//! Loads every user into a table with sortable columns, row selection,
//! and pagination, plus bulk block / unblock / delete actions over the
//! selection. Acting on your own row (or on every row at once) is the
//! app's only logout path.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::components::toast::show_error;
use crate::components::user_table::UserTable;
use crate::net::api;
use crate::net::types::User;
use crate::state::session::SessionState;
use crate::state::table::TableState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::util::auth::install_signin_redirect;

/// Whether a bulk action ends the acting user's own session: it does
/// when the selection covers their row or every loaded row.
#[cfg(any(test, feature = "hydrate"))]
fn ends_session(selected: &[String], current_user_id: Option<&str>, row_count: usize) -> bool {
    let includes_self = current_user_id.map_or(false, |id| selected.iter().any(|s| s == id));
    includes_self || selected.len() == row_count
}

/// Hard redirect used when the visitor's own account just lost access.
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Fire `request` for every selected id concurrently, then refresh the
/// table and clear the selection. When the action was a logout
/// equivalent, the session is cleared and the page leaves for sign-in.
fn spawn_bulk<F, Fut>(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    table: RwSignal<TableState>,
    rows: RwSignal<Vec<User>>,
    reload: RwSignal<u64>,
    request: F,
) where
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<(), api::ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let selected = table.with_untracked(|t| t.selected.clone());
        if selected.is_empty() {
            return;
        }
        let current_id = session.with_untracked(|s| s.user.as_ref().map(|u| u.id.clone()));
        let signs_out =
            ends_session(&selected, current_id.as_deref(), rows.with_untracked(Vec::len));

        leptos::task::spawn_local(async move {
            let results = futures::future::join_all(selected.into_iter().map(request)).await;
            if results.iter().any(Result::is_err) {
                show_error(toasts, "Some requests did not reach the server");
            }
            table.update(TableState::clear_selection);
            reload.update(|n| *n += 1);
            if signs_out {
                session.update(SessionState::clear);
                redirect_to_login();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, toasts, table, rows, reload, request);
    }
}

/// The users table with its selection toolbar.
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let table = RwSignal::new(TableState::default());
    let rows = RwSignal::new(Vec::<User>::new());
    let reload = RwSignal::new(0_u64);

    // Restore the stored session once, then keep the signed-out
    // redirect armed for the rest of the page's life.
    Effect::new(move || {
        if session.with_untracked(|s| s.loading) {
            session.update(SessionState::restore);
        }
    });
    #[cfg(feature = "hydrate")]
    install_signin_redirect(session, use_navigate());

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_users().await {
                Ok(list) => {
                    // Selection and page may reference rows that no
                    // longer exist after a bulk action.
                    table.update(|t| {
                        t.retain_loaded(&list);
                        t.clamp_page(list.len());
                    });
                    rows.set(list);
                }
                Err(error) => {
                    log::error!("user list request failed: {error}");
                    show_error(toasts, "Could not load users");
                }
            }
        });
    });

    let has_selection = move || table.with(|t| !t.selected.is_empty());
    let title = move || {
        let count = table.with(|t| t.selected.len());
        if count == 0 { "Users".to_owned() } else { format!("{count} selected") }
    };

    let on_block = move |_| {
        spawn_bulk(session, toasts, table, rows, reload, |id| async move {
            api::set_blocked(&id, false).await
        });
    };
    let on_unblock = move |_| {
        spawn_bulk(session, toasts, table, rows, reload, |id| async move {
            api::set_blocked(&id, true).await
        });
    };
    let on_delete = move |_| {
        spawn_bulk(session, toasts, table, rows, reload, |id| async move {
            api::delete_user(&id).await
        });
    };

    view! {
        <main class="users-page">
            <div class="users-page__panel">
                <div class="users-page__toolbar" class:users-page__toolbar--active=has_selection>
                    <h1 class="users-page__title">{title}</h1>
                    <Show when=has_selection>
                        <div class="users-page__actions">
                            <button class="btn btn--danger" title="Block" on:click=on_block>
                                "Block"
                            </button>
                            <button class="btn" title="Unblock" on:click=on_unblock>
                                "Unblock"
                            </button>
                            <button class="btn" title="Delete" on:click=on_delete>
                                "Delete"
                            </button>
                        </div>
                    </Show>
                </div>
                <UserTable rows=rows table=table/>
            </div>
        </main>
    }
}
