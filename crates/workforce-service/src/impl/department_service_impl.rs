//! Department service implementation.

use crate::department_service::DepartmentService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};
use workforce_core::{Department, DepartmentId, Entity, WorkforceError, WorkforceResult};
use workforce_repository::DepartmentDao;

/// Department service backed by a [`DepartmentDao`].
#[derive(Component)]
#[shaku(interface = DepartmentService)]
pub struct DepartmentServiceImpl {
    #[shaku(inject)]
    department_dao: Arc<dyn DepartmentDao>,
}

impl DepartmentServiceImpl {
    /// Creates a new department service.
    #[must_use]
    pub fn new(department_dao: Arc<dyn DepartmentDao>) -> Self {
        Self { department_dao }
    }
}

#[async_trait]
impl DepartmentService for DepartmentServiceImpl {
    async fn find_all(&self) -> WorkforceResult<Vec<Department>> {
        self.department_dao.find_all().await
    }

    async fn find_by_id(&self, id: DepartmentId) -> WorkforceResult<Option<Department>> {
        self.department_dao.find_by_id(id).await
    }

    async fn save_or_update(&self, department: &Department) -> WorkforceResult<Department> {
        if department.is_transient() {
            debug!("Saving new department: {}", department.name);
            self.department_dao.insert(department).await
        } else {
            debug!("Updating department: {}", department.name);
            self.department_dao.update(department).await
        }
    }

    async fn remove(&self, department: &Department) -> WorkforceResult<()> {
        let id = department
            .id
            .ok_or_else(|| WorkforceError::validation("id", "Department has not been saved"))?;

        self.department_dao.delete_by_id(id).await?;
        info!("Department removed: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for DepartmentServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepartmentServiceImpl").finish_non_exhaustive()
    }
}
