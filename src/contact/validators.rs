// src/contact/validators.rs

use super::models::{ContactForm, FormField};
use crate::common::{ValidationResult, Validator};
use regex::Regex;
use std::sync::LazyLock;

pub const FIRST_NAME_MIN_CHARS: usize = 5;

pub const FIRST_NAME_TOO_SHORT: &str = "firstName must have at least 5 characters.";
pub const LAST_NAME_REQUIRED: &str = "lastName is a required field.";
pub const EMAIL_INVALID: &str = "email must be a valid email address.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

// ============================================================================
// Field Rules
// ============================================================================

/// Applies the rule for `field` to `value`. `None` means the value passes.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    let value = value.trim();
    match field {
        FormField::FirstName => {
            (value.chars().count() < FIRST_NAME_MIN_CHARS).then_some(FIRST_NAME_TOO_SHORT)
        }
        FormField::LastName => value.is_empty().then_some(LAST_NAME_REQUIRED),
        FormField::Email => (!is_valid_email(value)).then_some(EMAIL_INVALID),
    }
}

/// Evaluates every field; one failure never hides another.
pub fn validate_all(form: &ContactForm) -> ValidationResult {
    FormField::ALL
        .into_iter()
        .fold(ValidationResult::new(), |mut result, field| {
            result.merge(field_result(field, form.value(field)));
            result
        })
}

/// Single-field outcome in the same shape `validate_all` reports.
pub fn field_result(field: FormField, value: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some(message) = validate_field(field, value) {
        result.add_error(field.as_str(), message);
    }
    result
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ============================================================================
// Contact Form Validator
// ============================================================================

pub struct ContactFormValidator;

impl Validator<ContactForm> for ContactFormValidator {
    fn validate(&self, data: &ContactForm) -> ValidationResult {
        validate_all(data)
    }
}
