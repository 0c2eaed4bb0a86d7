//! DAO (Data Access Object) layer.
//!
//! Each DAO owns the SQL for one table. Services depend on the traits in
//! this module and never on a concrete driver.
//!
//! ```text
//! Service → DAO (interface + impl) → SQLite
//! ```

pub mod department_dao;
pub mod r#impl;
pub mod seller_dao;

pub use department_dao::DepartmentDao;
pub use r#impl::{SqliteDepartmentDao, SqliteSellerDao};
pub use seller_dao::SellerDao;
