use super::*;

fn filled(name: &'static str, rules: &'static [Rule], value: &str) -> Field {
    let mut field = Field::new(name, rules);
    field.set_value(value.to_owned());
    field
}

#[test]
fn signin_payload_for_valid_fields() {
    let email = filled("email", EMAIL_RULES, "admin@example.com");
    let password = filled("password", PASSWORD_RULES, "secret");
    assert_eq!(
        signin_payload(&email, &password),
        Some(("admin@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn signin_payload_rejects_invalid_email() {
    let email = filled("email", EMAIL_RULES, "not-an-address");
    let password = filled("password", PASSWORD_RULES, "secret");
    assert_eq!(signin_payload(&email, &password), None);
}

#[test]
fn signin_payload_rejects_empty_password() {
    let email = filled("email", EMAIL_RULES, "admin@example.com");
    let password = Field::new("password", PASSWORD_RULES);
    assert_eq!(signin_payload(&email, &password), None);
}

#[test]
fn signin_password_has_no_length_rule() {
    // Sign-in accepts any non-empty password; only sign-up enforces a
    // minimum length.
    let email = filled("email", EMAIL_RULES, "admin@example.com");
    let password = filled("password", PASSWORD_RULES, "x");
    assert!(signin_payload(&email, &password).is_some());
}
