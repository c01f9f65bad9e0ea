//! Form field state and validation rules.
//!
//! A field pairs its current value with a static rule slice and a
//! touched flag. Errors are computed on demand from the rules; display
//! is gated on the touched flag so pristine forms render clean.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// A single validation rule.
///
/// Each variant pairs a predicate with a fixed user-visible message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-empty after trimming.
    Required,
    /// Shaped like an email address.
    Email,
    /// At least this many characters.
    MinLen(usize),
}

impl Rule {
    /// Whether `value` satisfies this rule.
    pub fn passes(self, value: &str) -> bool {
        match self {
            Self::Required => !value.trim().is_empty(),
            Self::Email => is_email(value),
            Self::MinLen(min) => value.chars().count() >= min,
        }
    }

    /// Message shown when this rule fails for the named field.
    pub fn message(self, field_name: &str) -> String {
        match self {
            Self::Required => format!("The {field_name} field is required."),
            Self::Email => format!("The {field_name} format is invalid."),
            Self::MinLen(min) => format!("The {field_name} must be at least {min} characters."),
        }
    }
}

/// Loose email shape check: one `@`, non-empty local part, and a domain
/// with an interior dot. Deliverability is the backend's problem.
fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// One text input plus its validation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Name used in validation messages ("email", "password", ...).
    pub name: &'static str,
    /// Current input value.
    pub value: String,
    /// Rules checked in order; the first failure wins.
    pub rules: &'static [Rule],
    /// Set on the first keystroke; gates error display.
    pub touched: bool,
}

impl Field {
    pub fn new(name: &'static str, rules: &'static [Rule]) -> Self {
        Self { name, value: String::new(), rules, touched: false }
    }

    /// Record user input, marking the field as touched.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.touched = true;
    }

    /// First failing rule's message, regardless of touched state.
    pub fn first_error(&self) -> Option<String> {
        self.rules.iter().find(|rule| !rule.passes(&self.value)).map(|rule| rule.message(self.name))
    }

    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    /// Error to show inline; hidden until the field is touched.
    pub fn visible_error(&self) -> Option<String> {
        if self.touched { self.first_error() } else { None }
    }
}
