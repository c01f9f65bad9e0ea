//! Users table: sortable headers, row selection, pagination footer.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::table::{
    ROWS_PER_PAGE_OPTIONS, SortOrder, TableState, UserColumn, visible_rows,
};

/// Height of one body row, used to size the filler under short pages.
const ROW_HEIGHT_PX: usize = 53;

/// Calendar-date part of a stored ISO 8601 timestamp. Missing values
/// render as an empty cell.
fn date_cell(value: Option<&str>) -> String {
    match value {
        Some(ts) => ts.chars().take(10).collect(),
        None => String::new(),
    }
}

fn status_label(active: bool) -> &'static str {
    if active { "active" } else { "blocked" }
}

/// Pagination range text, e.g. `1-5 of 13`.
fn range_label(start: usize, end: usize, count: usize) -> String {
    if count == 0 {
        "0\u{2013}0 of 0".to_owned()
    } else {
        format!("{}\u{2013}{} of {}", start + 1, end, count)
    }
}

/// Header row: select-all checkbox plus one sort button per column.
#[component]
fn UserTableHead(rows: RwSignal<Vec<User>>, table: RwSignal<TableState>) -> impl IntoView {
    let all_selected = move || {
        let count = rows.with(Vec::len);
        count > 0 && table.with(|t| t.selected.len()) == count
    };
    let some_selected = move || {
        let selected = table.with(|t| t.selected.len());
        selected > 0 && selected < rows.with(Vec::len)
    };

    view! {
        <thead class="user-table__head">
            <tr>
                <th class="user-table__cell user-table__cell--checkbox">
                    <input
                        type="checkbox"
                        prop:checked=all_selected
                        prop:indeterminate=some_selected
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            rows.with_untracked(|r| table.update(|t| t.set_all_selected(r, checked)));
                        }
                    />
                </th>
                {UserColumn::ALL
                    .into_iter()
                    .map(|column| {
                        let active = move || table.with(|t| t.order_by == Some(column));
                        let indicator = move || {
                            if !active() {
                                return "";
                            }
                            match table.with(|t| t.order) {
                                SortOrder::Asc => " \u{25b2}",
                                SortOrder::Desc => " \u{25bc}",
                            }
                        };
                        view! {
                            <th class="user-table__cell">
                                <button
                                    class="user-table__sort"
                                    class:user-table__sort--active=active
                                    on:click=move |_| table.update(|t| t.request_sort(column))
                                >
                                    {column.label()}
                                    {indicator}
                                </button>
                            </th>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tr>
        </thead>
    }
}

/// The table proper: header, body with filler rows, pagination footer.
///
/// Rows come in as a signal owned by the page; every interaction goes
/// through [`TableState`] so a refetch just replaces the row signal.
#[component]
pub fn UserTable(rows: RwSignal<Vec<User>>, table: RwSignal<TableState>) -> impl IntoView {
    let page_rows = move || rows.with(|r| table.with(|t| visible_rows(r, t)));
    let filler = move || rows.with(|r| table.with(|t| t.empty_rows(r.len())));
    let pagination_label = move || {
        let count = rows.with(Vec::len);
        let (start, end) = table.with(|t| t.page_window(count));
        range_label(start, end, count)
    };
    let at_first_page = move || table.with(|t| t.page) == 0;
    let at_last_page = move || {
        let count = rows.with(Vec::len);
        table.with(|t| t.page_window(count).1) >= count
    };

    view! {
        <div class="user-table">
            <table class="user-table__grid">
                <UserTableHead rows=rows table=table/>
                <tbody>
                    {move || {
                        page_rows()
                            .into_iter()
                            .map(|row| {
                                let row_id = row.id.clone();
                                let select_id = row.id.clone();
                                let check_id = row.id.clone();
                                let is_selected = move || table.with(|t| t.is_selected(&select_id));
                                let is_checked = move || table.with(|t| t.is_selected(&check_id));
                                view! {
                                    <tr
                                        class="user-table__row"
                                        class:user-table__row--selected=is_selected
                                        on:click=move |_| table.update(|t| t.toggle_row(&row_id))
                                    >
                                        <td class="user-table__cell user-table__cell--checkbox">
                                            // No handler of its own: the click bubbles to the row.
                                            <input type="checkbox" prop:checked=is_checked/>
                                        </td>
                                        <td class="user-table__cell">{row.name.clone()}</td>
                                        <td class="user-table__cell">{row.email.clone()}</td>
                                        <td class="user-table__cell">{date_cell(row.created_at.as_deref())}</td>
                                        <td class="user-table__cell">{date_cell(row.last_login.as_deref())}</td>
                                        <td class="user-table__cell">
                                            <span
                                                class="status-chip"
                                                class:status-chip--active=row.status
                                            >
                                                {status_label(row.status)}
                                            </span>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        let filler = filler();
                        (filler > 0)
                            .then(|| {
                                view! {
                                    <tr
                                        class="user-table__filler"
                                        style:height=format!("{}px", ROW_HEIGHT_PX * filler)
                                    >
                                        <td colspan="6"></td>
                                    </tr>
                                }
                            })
                    }}
                </tbody>
            </table>
            <div class="user-table__pagination">
                <span class="user-table__pagination-label">"Rows per page:"</span>
                <select
                    class="user-table__page-size"
                    prop:value=move || table.with(|t| t.rows_per_page.to_string())
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            table.update(|t| t.set_rows_per_page(size));
                        }
                    }
                >
                    {ROWS_PER_PAGE_OPTIONS
                        .into_iter()
                        .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <span class="user-table__range">{pagination_label}</span>
                <button
                    class="user-table__pager"
                    title="Previous page"
                    disabled=at_first_page
                    on:click=move |_| table.update(|t| t.page = t.page.saturating_sub(1))
                >
                    "\u{2039}"
                </button>
                <button
                    class="user-table__pager"
                    title="Next page"
                    disabled=at_last_page
                    on:click=move |_| {
                        let count = rows.with_untracked(Vec::len);
                        table.update(|t| {
                            t.page += 1;
                            t.clamp_page(count);
                        });
                    }
                >
                    "\u{203a}"
                </button>
            </div>
        </div>
    }
}
