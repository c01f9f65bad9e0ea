//! Signed-in session, mirrored to browser local storage.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

/// The signed-in user plus a restore guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Currently signed-in user, if any.
    pub user: Option<User>,
    /// True until storage has been checked once. Redirect guards wait
    /// for this so a stored session is not mistaken for signed-out.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Load any stored session. Off-browser there is no storage, so
    /// this resolves to signed-out.
    pub fn restore(&mut self) {
        self.user = storage::read_session_user();
        self.loading = false;
    }

    /// Record a fresh sign-in or sign-up and persist it.
    pub fn establish(&mut self, user: User) {
        storage::write_session_user(&user);
        self.user = Some(user);
        self.loading = false;
    }

    /// End the session, e.g. after the signed-in user blocked or
    /// deleted their own account.
    pub fn clear(&mut self) {
        storage::clear_session_user();
        self.user = None;
        self.loading = false;
    }
}
