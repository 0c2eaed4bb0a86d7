//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module.
//! Implementations are organized by database driver.

pub mod sqlite;

pub use sqlite::{SqliteDepartmentDao, SqliteSellerDao};
