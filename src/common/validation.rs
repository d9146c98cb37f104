// Common validation types and traits

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating a record: failing field names mapped to their
/// messages. Passing fields never appear in `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    /// Records a failure for `field`. A second failure for the same field
    /// replaces the first message.
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid);
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        let result = ValidationResult::default();
        assert_eq!(result, ValidationResult::new());
        assert_eq!(result.is_valid, result.errors.is_empty());
    }

    #[test]
    fn test_add_error_marks_invalid() {
        let mut result = ValidationResult::new();
        result.add_error("email", "bad");
        assert!(!result.is_valid);
        assert_eq!(result.error_for("email"), Some("bad"));
        assert_eq!(result.error_for("lastName"), None);
    }

    #[test]
    fn test_merge_keeps_valid_when_other_is_valid() {
        let mut result = ValidationResult::new();
        result.merge(ValidationResult::new());
        assert!(result.is_valid);

        let mut failing = ValidationResult::new();
        failing.add_error("firstName", "too short");
        result.merge(failing);
        assert!(!result.is_valid);
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut result = ValidationResult::new();
        result.add_error("lastName", "lastName is a required field.");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["errors"]["lastName"], "lastName is a required field.");
    }
}
