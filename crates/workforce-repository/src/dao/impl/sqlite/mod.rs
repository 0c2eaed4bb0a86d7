//! SQLite DAO implementations.

mod department_dao_impl;
mod seller_dao_impl;

pub use department_dao_impl::SqliteDepartmentDao;
pub use seller_dao_impl::SqliteSellerDao;
