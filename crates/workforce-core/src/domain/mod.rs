//! # Workforce Domain
//!
//! The business records managed by the registry.

pub mod entities;

pub use entities::*;
