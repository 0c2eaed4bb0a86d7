//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use workforce_core::{Department, Seller};
use workforce_repository::{
    DatabasePool, DatabasePoolInterface, DepartmentDao, SellerDao, SqliteDepartmentDao,
    SqliteSellerDao,
};

/// Private in-memory database with the schema applied.
///
/// Each instance owns its own database, so tests never see each other's rows.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a new in-memory database and runs migrations.
    pub async fn new() -> Self {
        let pool = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    pub fn department_dao(&self) -> SqliteDepartmentDao {
        SqliteDepartmentDao::new(self.pool())
    }

    pub fn seller_dao(&self) -> SqliteSellerDao {
        SqliteSellerDao::new(self.pool())
    }

    /// Inserts a department and returns it persisted.
    pub async fn department(&self, name: &str) -> Department {
        self.department_dao()
            .insert(&Department::new(name))
            .await
            .expect("Failed to insert department")
    }

    /// Inserts a seller of `department` and returns it persisted.
    pub async fn seller(&self, name: &str, department: &Department) -> Seller {
        self.seller_dao()
            .insert(&test_seller(name, department))
            .await
            .expect("Failed to insert seller")
    }
}

/// Builds a transient seller with fixed contact details.
pub fn test_seller(name: &str, department: &Department) -> Seller {
    Seller::new(
        name,
        format!("{}@gmail.com", name.to_lowercase()),
        NaiveDate::from_ymd_opt(1998, 4, 21).expect("valid date"),
        Decimal::new(300000, 2),
        department.clone(),
    )
}
