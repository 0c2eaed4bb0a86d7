//! DepartmentDao trait: persistence contract for departments.

use async_trait::async_trait;
use workforce_core::{Department, DepartmentId, Interface, WorkforceResult};

/// Department data access object.
///
/// Identities are generated by the database on insert. Lookups of a
/// missing id return `Ok(None)`; writes against a missing id fail with
/// [`WorkforceError::NotFound`].
///
/// [`WorkforceError::NotFound`]: workforce_core::WorkforceError::NotFound
#[async_trait]
pub trait DepartmentDao: Interface + Send + Sync {
    /// Inserts a transient department and returns it with its generated id.
    async fn insert(&self, department: &Department) -> WorkforceResult<Department>;

    /// Overwrites the name of a persisted department.
    async fn update(&self, department: &Department) -> WorkforceResult<Department>;

    /// Deletes a department.
    ///
    /// Fails with `Integrity` while sellers still reference it.
    async fn delete_by_id(&self, id: DepartmentId) -> WorkforceResult<()>;

    /// Finds a department by id.
    async fn find_by_id(&self, id: DepartmentId) -> WorkforceResult<Option<Department>>;

    /// Lists every department ordered by name.
    async fn find_all(&self) -> WorkforceResult<Vec<Department>>;
}
