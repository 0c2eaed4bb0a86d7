//! # Workforce Core
//!
//! Entities, typed identities, the shared error taxonomy, and form
//! validation helpers used by every layer of the workforce registry.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
