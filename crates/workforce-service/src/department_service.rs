//! Department service trait definition.

use async_trait::async_trait;
use workforce_core::{Department, DepartmentId, Interface, WorkforceResult};

/// Department service trait.
#[async_trait]
pub trait DepartmentService: Interface + Send + Sync {
    /// Lists every department ordered by name.
    async fn find_all(&self) -> WorkforceResult<Vec<Department>>;

    /// Gets a department by ID.
    async fn find_by_id(&self, id: DepartmentId) -> WorkforceResult<Option<Department>>;

    /// Inserts a transient department or updates a persisted one.
    async fn save_or_update(&self, department: &Department) -> WorkforceResult<Department>;

    /// Deletes a persisted department.
    async fn remove(&self, department: &Department) -> WorkforceResult<()>;
}
