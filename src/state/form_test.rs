use super::*;

const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MinLen(8)];

// =============================================================
// Rules
// =============================================================

#[test]
fn required_rejects_empty_and_whitespace() {
    assert!(!Rule::Required.passes(""));
    assert!(!Rule::Required.passes("   "));
    assert!(!Rule::Required.passes("\t\n"));
}

#[test]
fn required_accepts_text() {
    assert!(Rule::Required.passes("a"));
    assert!(Rule::Required.passes("  padded  "));
}

#[test]
fn email_accepts_plain_addresses() {
    assert!(Rule::Email.passes("user@example.com"));
    assert!(Rule::Email.passes("first.last@sub.example.co"));
    assert!(Rule::Email.passes("u+tag@example.io"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!Rule::Email.passes(""));
    assert!(!Rule::Email.passes("plain"));
    assert!(!Rule::Email.passes("@example.com"));
    assert!(!Rule::Email.passes("user@"));
    assert!(!Rule::Email.passes("user@nodot"));
    assert!(!Rule::Email.passes("user@.com"));
    assert!(!Rule::Email.passes("user@example."));
    assert!(!Rule::Email.passes("us er@example.com"));
    assert!(!Rule::Email.passes("user@@example.com"));
}

#[test]
fn min_len_boundary() {
    assert!(!Rule::MinLen(8).passes("1234567"));
    assert!(Rule::MinLen(8).passes("12345678"));
}

#[test]
fn min_len_counts_characters_not_bytes() {
    // 8 characters, more than 8 bytes.
    assert!(Rule::MinLen(8).passes("pässwörd"));
}

#[test]
fn messages_name_the_field() {
    assert_eq!(Rule::Required.message("email"), "The email field is required.");
    assert_eq!(Rule::Email.message("email"), "The email format is invalid.");
    assert_eq!(
        Rule::MinLen(8).message("password"),
        "The password must be at least 8 characters."
    );
}

// =============================================================
// Field
// =============================================================

#[test]
fn new_field_starts_empty_and_untouched() {
    let field = Field::new("email", EMAIL_RULES);
    assert_eq!(field.value, "");
    assert!(!field.touched);
    assert!(!field.is_valid());
}

#[test]
fn set_value_marks_touched() {
    let mut field = Field::new("email", EMAIL_RULES);
    field.set_value("u".to_owned());
    assert!(field.touched);
    assert_eq!(field.value, "u");
}

#[test]
fn first_error_reports_rules_in_order() {
    let mut field = Field::new("email", EMAIL_RULES);
    assert_eq!(field.first_error(), Some("The email field is required.".to_owned()));
    field.set_value("not-an-address".to_owned());
    assert_eq!(field.first_error(), Some("The email format is invalid.".to_owned()));
    field.set_value("user@example.com".to_owned());
    assert_eq!(field.first_error(), None);
    assert!(field.is_valid());
}

#[test]
fn untouched_field_hides_errors() {
    let field = Field::new("password", PASSWORD_RULES);
    assert!(field.first_error().is_some());
    assert_eq!(field.visible_error(), None);
}

#[test]
fn touched_field_shows_errors() {
    let mut field = Field::new("password", PASSWORD_RULES);
    field.set_value("short".to_owned());
    assert_eq!(
        field.visible_error(),
        Some("The password must be at least 8 characters.".to_owned())
    );
    field.set_value("long enough".to_owned());
    assert_eq!(field.visible_error(), None);
}

#[test]
fn manually_touching_reveals_required_error() {
    // Submit with a pristine invalid form marks fields touched without
    // changing their values.
    let mut field = Field::new("name", &[Rule::Required]);
    field.touched = true;
    assert_eq!(field.visible_error(), Some("The name field is required.".to_owned()));
}
