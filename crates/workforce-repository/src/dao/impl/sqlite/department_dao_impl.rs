//! SQLite department DAO.

use crate::{dao::DepartmentDao, DatabasePoolInterface};
use async_trait::async_trait;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};
use workforce_core::{Department, DepartmentId, Entity, WorkforceError, WorkforceResult};

/// SQLite implementation of [`DepartmentDao`].
#[derive(Component, Clone)]
#[shaku(interface = DepartmentDao)]
pub struct SqliteDepartmentDao {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteDepartmentDao {
    /// Creates a new SQLite department DAO.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

impl std::fmt::Debug for SqliteDepartmentDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDepartmentDao").finish_non_exhaustive()
    }
}

#[derive(Debug, FromRow)]
struct DepartmentRow {
    id: i64,
    name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department::with_id(DepartmentId::new(row.id), row.name)
    }
}

#[async_trait]
impl DepartmentDao for SqliteDepartmentDao {
    async fn insert(&self, department: &Department) -> WorkforceResult<Department> {
        debug!("Inserting department: {}", department.name);

        if let Some(id) = department.id {
            return Err(WorkforceError::internal(format!(
                "Department {} is already persisted",
                id
            )));
        }

        let result = sqlx::query("INSERT INTO department (name) VALUES (?)")
            .bind(&department.name)
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::internal("Unexpected error! No rows affected"));
        }

        let id = DepartmentId::new(result.last_insert_rowid());
        info!("Inserted department {} with id {}", department.name, id);

        Ok(department.clone().persisted(id))
    }

    async fn update(&self, department: &Department) -> WorkforceResult<Department> {
        let id = department.id.ok_or_else(|| {
            WorkforceError::validation("id", "Department has not been inserted")
        })?;
        debug!("Updating department: {}", id);

        let result = sqlx::query("UPDATE department SET name = ? WHERE id = ?")
            .bind(&department.name)
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::not_found(Department::RESOURCE, id));
        }

        Ok(department.clone())
    }

    async fn delete_by_id(&self, id: DepartmentId) -> WorkforceResult<()> {
        debug!("Deleting department: {}", id);

        let result = sqlx::query("DELETE FROM department WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await
            .map_err(|e| WorkforceError::from_delete(e, Department::RESOURCE))?;

        if result.rows_affected() == 0 {
            return Err(WorkforceError::not_found(Department::RESOURCE, id));
        }

        info!("Deleted department {}", id);
        Ok(())
    }

    async fn find_by_id(&self, id: DepartmentId) -> WorkforceResult<Option<Department>> {
        debug!("Finding department by id: {}", id);

        let row = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name FROM department WHERE id = ?",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Department::from))
    }

    async fn find_all(&self) -> WorkforceResult<Vec<Department>> {
        debug!("Finding all departments");

        let rows = sqlx::query_as::<_, DepartmentRow>(
            "SELECT id, name FROM department ORDER BY name COLLATE NOCASE, id",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Department::from).collect())
    }
}
