use super::*;

fn selected(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

#[test]
fn bulk_action_on_own_row_ends_the_session() {
    assert!(ends_session(&selected(&["u-2", "u-5"]), Some("u-5"), 10));
}

#[test]
fn bulk_action_on_every_row_ends_the_session() {
    // Even when the acting user's row is not among them (e.g. their
    // account was already removed server-side).
    assert!(ends_session(&selected(&["u-1", "u-2", "u-3"]), Some("u-9"), 3));
}

#[test]
fn bulk_action_on_other_rows_keeps_the_session() {
    assert!(!ends_session(&selected(&["u-2", "u-3"]), Some("u-1"), 10));
}

#[test]
fn unknown_current_user_only_ends_on_full_selection() {
    assert!(!ends_session(&selected(&["u-2"]), None, 10));
    assert!(ends_session(&selected(&["u-1", "u-2"]), None, 2));
}
