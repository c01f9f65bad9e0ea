use super::*;

fn make_user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        status: true,
        created_at: None,
        last_login: None,
    }
}

#[test]
fn default_session_is_loading_and_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn restore_off_browser_resolves_to_signed_out() {
    let mut state = SessionState::default();
    state.restore();
    assert!(!state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn establish_records_the_user() {
    let mut state = SessionState::default();
    state.establish(make_user("u-1"));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn clear_signs_out() {
    let mut state = SessionState::default();
    state.establish(make_user("u-1"));
    state.clear();
    assert!(!state.loading);
    assert_eq!(state.user, None);
}
