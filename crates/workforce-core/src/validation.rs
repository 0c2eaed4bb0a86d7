//! Form validation utilities.
//!
//! Form checks accumulate into [`FieldErrors`], a mapping from field name
//! to message. A non-empty mapping aborts the save before any service or
//! DAO call is made.

use crate::{FieldError, WorkforceError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationErrors};

/// Message shown next to a required field left blank.
pub const REQUIRED_FIELD_MESSAGE: &str = "Field can't be empty";

/// Field-level validation errors keyed by field name.
///
/// Only the first message per field is kept, matching a form that shows a
/// single error label beside each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty error mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping holding a single error.
    #[must_use]
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records an error for `field` unless one is already present.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Returns the message recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns true if `field` has an error.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `Ok(())` when empty, otherwise a validation error.
    pub fn into_result(self) -> Result<(), WorkforceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(WorkforceError::Validation(self))
        }
    }

    /// Converts the mapping into the serializable detail list.
    #[must_use]
    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.iter()
            .map(|(field, message)| FieldError {
                field: field.to_string(),
                message: message.to_string(),
                code: "INVALID_FIELD".to_string(),
            })
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = Self::new();
        for (field, errors) in errors.field_errors() {
            for error in errors {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                field_errors.add(field.to_string(), message);
            }
        }
        field_errors
    }
}

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns the collected field errors.
    fn validate_fields(&self) -> FieldErrors {
        self.validate().map_or_else(FieldErrors::from, |()| FieldErrors::new())
    }

    /// Validates the struct and returns a `WorkforceError` on failure.
    fn validate_form(&self) -> Result<(), WorkforceError> {
        self.validate_fields().into_result()
    }
}

impl<T: Validate> ValidateExt for T {}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a trimmed string holds at most `max` characters.
    pub fn max_chars(value: &str, max: usize) -> Result<(), ValidationError> {
        if value.trim().chars().count() > max {
            return Err(ValidationError::new("too_long"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_max_chars_counts_characters_not_bytes() {
        assert!(max_chars("ação", 4).is_ok());
        assert!(max_chars("  abc  ", 3).is_ok());
        assert!(max_chars("abcd", 3).is_err());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("name", REQUIRED_FIELD_MESSAGE);
        errors.add("name", "too long");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(REQUIRED_FIELD_MESSAGE));
    }

    #[test]
    fn test_field_errors_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let err = FieldErrors::single("email", REQUIRED_FIELD_MESSAGE)
            .into_result()
            .unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains("email"));
    }

    #[test]
    fn test_field_errors_display_sorted_by_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "a");
        errors.add("email", "b");
        assert_eq!(errors.to_string(), "email: b; name: a");
    }

    #[test]
    fn test_to_field_errors() {
        let details = FieldErrors::single("name", REQUIRED_FIELD_MESSAGE).to_field_errors();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "name");
        assert_eq!(details[0].code, "INVALID_FIELD");
    }
}
