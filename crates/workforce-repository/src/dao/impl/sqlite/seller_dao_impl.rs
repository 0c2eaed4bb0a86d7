//! SQLite seller DAO.

use crate::{dao::SellerDao, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shaku::Component;
use sqlx::FromRow;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};
use workforce_core::{
    Department, DepartmentId, Entity, Seller, SellerId, WorkforceError, WorkforceResult,
};

/// Seller columns joined with the owning department's name.
const SELECT_SELLER: &str = r#"
    SELECT seller.id, seller.name, seller.email, seller.birth_date,
           seller.base_salary, seller.department_id,
           department.name AS department_name
    FROM seller
    INNER JOIN department ON seller.department_id = department.id
"#;

const ORDER_BY_NAME: &str = "ORDER BY seller.name COLLATE NOCASE, seller.id";

/// SQLite implementation of [`SellerDao`].
#[derive(Component, Clone)]
#[shaku(interface = SellerDao)]
pub struct SqliteSellerDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteSellerDao {
    /// Creates a new SQLite seller DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for SqliteSellerDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSellerDao").finish_non_exhaustive()
    }
}

/// Database row representation of a seller and its department name.
#[derive(Debug, FromRow)]
struct SellerRow {
    id: i64,
    name: String,
    email: String,
    birth_date: NaiveDate,
    base_salary: String, // stored as TEXT to keep exact decimals
    department_id: i64,
    department_name: String,
}

impl SellerRow {
    fn into_seller(self, department: Arc<Department>) -> WorkforceResult<Seller> {
        let base_salary = Decimal::from_str(&self.base_salary).map_err(|e| {
            WorkforceError::Internal(format!(
                "Invalid base salary in database for seller {}: {}",
                self.id, e
            ))
        })?;

        Ok(Seller {
            id: Some(SellerId::new(self.id)),
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            base_salary,
            department,
        })
    }
}

/// Converts rows into sellers, sharing one `Department` per distinct id.
fn map_rows(rows: Vec<SellerRow>) -> WorkforceResult<Vec<Seller>> {
    let mut departments: HashMap<DepartmentId, Arc<Department>> = HashMap::new();

    rows.into_iter()
        .map(|row| {
            let department_id = DepartmentId::new(row.department_id);
            let department = departments
                .entry(department_id)
                .or_insert_with(|| {
                    Arc::new(Department::with_id(department_id, row.department_name.clone()))
                })
                .clone();
            row.into_seller(department)
        })
        .collect()
}

/// Returns the key of the seller's department, which must be persisted.
fn department_key(seller: &Seller) -> WorkforceResult<i64> {
    seller
        .department
        .id
        .map(DepartmentId::into_inner)
        .ok_or_else(|| WorkforceError::validation("department", "Department has not been saved"))
}

#[async_trait]
impl SellerDao for SqliteSellerDao {
    async fn insert(&self, seller: &Seller) -> WorkforceResult<Seller> {
        debug!("Inserting seller: {}", seller.name);

        if let Some(id) = seller.id {
            return Err(WorkforceError::internal(format!(
                "Seller {} is already persisted",
                id
            )));
        }
        let department_id = department_key(seller)?;

        let result = sqlx::query(
            r#"
            INSERT INTO seller (name, email, birth_date, base_salary, department_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary.to_string())
        .bind(department_id)
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::internal("Unexpected error! No rows affected"));
        }

        let id = SellerId::new(result.last_insert_rowid());
        info!("Inserted seller {} with id {}", seller.name, id);

        Ok(seller.clone().persisted(id))
    }

    async fn update(&self, seller: &Seller) -> WorkforceResult<Seller> {
        let id = seller
            .id
            .ok_or_else(|| WorkforceError::validation("id", "Seller has not been inserted"))?;
        let department_id = department_key(seller)?;
        debug!("Updating seller: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE seller
            SET name = ?, email = ?, birth_date = ?, base_salary = ?, department_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&seller.name)
        .bind(&seller.email)
        .bind(seller.birth_date)
        .bind(seller.base_salary.to_string())
        .bind(department_id)
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::not_found(Seller::RESOURCE, id));
        }

        Ok(seller.clone())
    }

    async fn delete_by_id(&self, id: SellerId) -> WorkforceResult<()> {
        debug!("Deleting seller: {}", id);

        let result = sqlx::query("DELETE FROM seller WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await
            .map_err(|e| WorkforceError::from_delete(e, Seller::RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::not_found(Seller::RESOURCE, id));
        }

        info!("Deleted seller {}", id);
        Ok(())
    }

    async fn find_by_id(&self, id: SellerId) -> WorkforceResult<Option<Seller>> {
        debug!("Finding seller by id: {}", id);

        let sql = format!("{SELECT_SELLER} WHERE seller.id = ?");
        let row = sqlx::query_as::<_, SellerRow>(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        match row {
            Some(row) => Ok(map_rows(vec![row])?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> WorkforceResult<Vec<Seller>> {
        debug!("Finding all sellers");

        let sql = format!("{SELECT_SELLER} {ORDER_BY_NAME}");
        let rows = sqlx::query_as::<_, SellerRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        map_rows(rows)
    }

    async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> WorkforceResult<Vec<Seller>> {
        debug!("Finding sellers by department: {}", department_id);

        let sql = format!("{SELECT_SELLER} WHERE seller.department_id = ? {ORDER_BY_NAME}");
        let rows = sqlx::query_as::<_, SellerRow>(&sql)
            .bind(department_id.into_inner())
            .fetch_all(self.pool.inner())
            .await?;

        map_rows(rows)
    }
}
