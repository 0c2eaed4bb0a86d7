//! Unified error types for all layers of the application.

use crate::FieldErrors;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the workforce registry.
///
/// Callers distinguish persistence failures by variant: `Integrity` for a
/// delete blocked by a foreign key, `NotFound` for a missing identity, and
/// `Database` for everything else the driver reports.
#[derive(Error, Debug)]
pub enum WorkforceError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Form validation failed; carries one message per offending field.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    // ============ Persistence Errors ============
    /// A delete was blocked by rows that still reference the target.
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WorkforceError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Integrity(_) => "INTEGRITY_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error for a single field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(FieldErrors::single(field, message))
    }

    /// Creates an integrity error.
    #[must_use]
    pub fn integrity<T: Into<String>>(message: T) -> Self {
        Self::Integrity(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field errors of a validation failure.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

#[cfg(feature = "sqlx")]
impl WorkforceError {
    /// Translates a failed delete statement.
    ///
    /// Foreign-key violations become [`WorkforceError::Integrity`]; every
    /// other failure goes through the generic `From<sqlx::Error>` mapping.
    #[must_use]
    pub fn from_delete(err: sqlx::Error, resource_type: &'static str) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return Self::Integrity(format!(
                    "Cannot remove {resource_type}: referenced by other records ({})",
                    db_err.message()
                ));
            }
        }
        Self::from(err)
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for WorkforceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => Self::Database(db_err.message().to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Serializable error response for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `WorkforceError`.
    ///
    /// Validation failures carry their field errors as details.
    #[must_use]
    pub fn from_error(error: &WorkforceError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: error.field_errors().map(FieldErrors::to_field_errors),
        }
    }
}

impl From<&WorkforceError> for ErrorResponse {
    fn from(error: &WorkforceError) -> Self {
        Self::from_error(error)
    }
}
