//! # Workforce Repository
//!
//! Data access for departments and sellers:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn DepartmentDao> / Arc<dyn SellerDao>   (DAO interfaces)
//! SqliteDepartmentDao / SqliteSellerDao              (DAO impls, SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   pool.rs                        ← DatabasePool, migrations
//!   dao/
//!     department_dao.rs            ← DepartmentDao trait
//!     seller_dao.rs                ← SellerDao trait
//!     impl/
//!       sqlite/
//!         department_dao_impl.rs   ← SqliteDepartmentDao
//!         seller_dao_impl.rs       ← SqliteSellerDao
//! ```

pub mod dao;
pub mod pool;

pub use dao::{DepartmentDao, SellerDao, SqliteDepartmentDao, SqliteSellerDao};
pub use pool::*;
