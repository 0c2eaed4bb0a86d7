//! Result type aliases for the workforce registry.

use crate::WorkforceError;

/// A specialized `Result` type for workforce operations.
pub type WorkforceResult<T> = Result<T, WorkforceError>;
