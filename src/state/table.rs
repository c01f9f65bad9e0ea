//! Sort, selection, and pagination state for the users table.
//!
//! DESIGN
//! ======
//! The table never owns its rows. Everything here operates on a borrowed
//! `&[User]` plus this state struct, so a refetch simply replaces the
//! row signal and re-runs the same pure functions. Sorting is stable:
//! rows with equal keys keep their fetch order in both directions.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;

use crate::net::types::User;

/// Page size choices offered by the pagination footer.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Sort direction for the active column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sortable columns of the users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserColumn {
    Name,
    Email,
    Joined,
    LastLogin,
    Status,
}

impl UserColumn {
    /// Header order, left to right.
    pub const ALL: [Self; 5] =
        [Self::Name, Self::Email, Self::Joined, Self::LastLogin, Self::Status];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Joined => "Joined",
            Self::LastLogin => "Last Login",
            Self::Status => "Status",
        }
    }
}

fn compare_by_column(a: &User, b: &User, column: UserColumn) -> Ordering {
    match column {
        UserColumn::Name => a.name.cmp(&b.name),
        UserColumn::Email => a.email.cmp(&b.email),
        UserColumn::Joined => a.created_at.cmp(&b.created_at),
        UserColumn::LastLogin => a.last_login.cmp(&b.last_login),
        UserColumn::Status => a.status.cmp(&b.status),
    }
}

/// Sorted copy of `rows`. Equal keys keep their input order in both
/// directions because descending reverses the comparator, not the slice.
pub fn sort_users(rows: &[User], column: UserColumn, order: SortOrder) -> Vec<User> {
    let mut sorted = rows.to_vec();
    match order {
        SortOrder::Asc => sorted.sort_by(|a, b| compare_by_column(a, b, column)),
        SortOrder::Desc => sorted.sort_by(|a, b| compare_by_column(b, a, column)),
    }
    sorted
}

/// Interactive state of the users table: sort, selection, pagination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    /// Direction applied to the active sort column.
    pub order: SortOrder,
    /// Active sort column; `None` keeps rows in fetch order.
    pub order_by: Option<UserColumn>,
    /// Ids of the checked rows, in click order.
    pub selected: Vec<String>,
    /// Zero-based page index.
    pub page: usize,
    /// Rows shown per page.
    pub rows_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            order: SortOrder::Asc,
            order_by: None,
            selected: Vec::new(),
            page: 0,
            rows_per_page: ROWS_PER_PAGE_OPTIONS[0],
        }
    }
}

impl TableState {
    /// Header click: flip direction on the active column, or sort a new
    /// column ascending.
    pub fn request_sort(&mut self, column: UserColumn) {
        if self.order_by == Some(column) {
            self.order = self.order.flipped();
        } else {
            self.order_by = Some(column);
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Toggle one row's selection, preserving the order of the rest.
    pub fn toggle_row(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_owned());
        }
    }

    /// Header checkbox: select every loaded row or none.
    pub fn set_all_selected(&mut self, rows: &[User], checked: bool) {
        self.selected =
            if checked { rows.iter().map(|u| u.id.clone()).collect() } else { Vec::new() };
    }

    /// Drop selections for rows no longer present after a refetch.
    pub fn retain_loaded(&mut self, rows: &[User]) {
        self.selected.retain(|id| rows.iter().any(|u| &u.id == id));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Change the page size and jump back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    fn last_page(&self, row_count: usize) -> usize {
        if row_count == 0 { 0 } else { (row_count - 1) / self.rows_per_page }
    }

    /// Pull the page index back into range after rows were removed.
    pub fn clamp_page(&mut self, row_count: usize) {
        self.page = self.page.min(self.last_page(row_count));
    }

    /// Half-open `[start, end)` row range of the current page.
    pub fn page_window(&self, row_count: usize) -> (usize, usize) {
        let start = (self.page * self.rows_per_page).min(row_count);
        let end = (start + self.rows_per_page).min(row_count);
        (start, end)
    }

    /// Blank rows needed to keep a short trailing page at full height.
    /// Page zero never pads, so small row sets render compact.
    pub fn empty_rows(&self, row_count: usize) -> usize {
        if self.page == 0 {
            0
        } else {
            ((self.page + 1) * self.rows_per_page).saturating_sub(row_count)
        }
    }
}

/// Rows of the current page in display order.
pub fn visible_rows(rows: &[User], state: &TableState) -> Vec<User> {
    let ordered = match state.order_by {
        Some(column) => sort_users(rows, column, state.order),
        None => rows.to_vec(),
    };
    let (start, end) = state.page_window(ordered.len());
    ordered[start..end].to_vec()
}
