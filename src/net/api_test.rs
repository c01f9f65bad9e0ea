use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn users_endpoint_is_relative_without_origin() {
    assert_eq!(users_endpoint(""), "/api/users");
}

#[test]
fn users_endpoint_prefixes_origin() {
    assert_eq!(users_endpoint("http://localhost:8080"), "http://localhost:8080/api/users");
}

#[test]
fn login_endpoint_path() {
    assert_eq!(login_endpoint(""), "/api/auth/login");
}

#[test]
fn block_endpoint_path() {
    assert_eq!(block_endpoint(""), "/api/users/block");
}

#[test]
fn delete_endpoint_includes_id() {
    assert_eq!(delete_endpoint("", "u-42"), "/api/users/u-42");
}

#[test]
fn delete_endpoint_prefixes_origin() {
    assert_eq!(
        delete_endpoint("https://api.example.com", "u-1"),
        "https://api.example.com/api/users/u-1"
    );
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_means_bad_credentials() {
    assert_eq!(login_failure_outcome(401), Some(LoginOutcome::BadCredentials));
}

#[test]
fn status_403_means_blocked() {
    assert_eq!(login_failure_outcome(403), Some(LoginOutcome::Blocked));
}

#[test]
fn other_login_statuses_are_unexpected() {
    assert_eq!(login_failure_outcome(500), None);
    assert_eq!(login_failure_outcome(404), None);
    assert_eq!(login_failure_outcome(200), None);
}

#[test]
fn status_400_means_already_registered() {
    assert_eq!(register_failure_outcome(400), Some(RegisterOutcome::AlreadyRegistered));
}

#[test]
fn other_register_statuses_are_unexpected() {
    assert_eq!(register_failure_outcome(401), None);
    assert_eq!(register_failure_outcome(500), None);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Transport("connection refused".into()).to_string(),
        "request failed: connection refused"
    );
    assert_eq!(
        ApiError::Decode("missing field".into()).to_string(),
        "invalid response body: missing field"
    );
    assert_eq!(ApiError::UnexpectedStatus(502).to_string(), "unexpected status: 502");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_report_unavailable() {
    let outcome = futures::executor::block_on(login("a@b.c", "secret"));
    assert_eq!(outcome, Err(ApiError::Unavailable));
    let outcome = futures::executor::block_on(list_users());
    assert_eq!(outcome, Err(ApiError::Unavailable));
    let outcome = futures::executor::block_on(set_blocked("u-1", false));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}
