//! List and form controllers behind the CLI subcommands.

use super::render::{self, LOAD_ERROR_HEADING, REMOVE_ERROR_HEADING, SAVE_ERROR_HEADING};
use super::{Command, DepartmentAction, DepartmentArgs, SellerAction, SellerArgs};
use crate::di::ServiceResolver;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use workforce_core::{
    Department, DepartmentId, Entity, Seller, SellerId, WorkforceError, WorkforceResult,
};
use workforce_service::{DepartmentForm, DepartmentService, SellerForm, SellerService};

/// A failed command and the heading it is reported under.
#[derive(Debug)]
pub struct Failure {
    pub heading: &'static str,
    pub error: WorkforceError,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::error_report(self.heading, &self.error))
    }
}

impl std::error::Error for Failure {}

/// Runs commands against the department and seller services.
#[derive(Clone)]
pub struct Controller {
    departments: Arc<dyn DepartmentService>,
    sellers: Arc<dyn SellerService>,
}

impl Controller {
    #[must_use]
    pub fn new(departments: Arc<dyn DepartmentService>, sellers: Arc<dyn SellerService>) -> Self {
        Self {
            departments,
            sellers,
        }
    }

    /// Resolves both services from a DI module.
    #[must_use]
    pub fn from_module<M: ServiceResolver>(module: &M) -> Self {
        Self::new(module.department_service(), module.seller_service())
    }

    /// Executes a command and returns the text to print.
    pub async fn execute(&self, command: Command) -> Result<String, Failure> {
        debug!("Executing command: {:?}", command);

        let (heading, result) = match command {
            Command::Department { action } => match action {
                DepartmentAction::List => (LOAD_ERROR_HEADING, self.list_departments().await),
                DepartmentAction::Save(args) => {
                    (SAVE_ERROR_HEADING, self.save_department(args).await)
                }
                DepartmentAction::Remove { id, .. } => {
                    (REMOVE_ERROR_HEADING, self.remove_department(id).await)
                }
            },
            Command::Seller { action } => match action {
                SellerAction::List { department } => {
                    (LOAD_ERROR_HEADING, self.list_sellers(department).await)
                }
                SellerAction::Save(args) => (SAVE_ERROR_HEADING, self.save_seller(args).await),
                SellerAction::Remove { id, .. } => {
                    (REMOVE_ERROR_HEADING, self.remove_seller(id).await)
                }
            },
        };

        result.map_err(|error| Failure { heading, error })
    }

    async fn list_departments(&self) -> WorkforceResult<String> {
        let departments = self.departments.find_all().await?;
        Ok(render::department_table(&departments))
    }

    async fn save_department(&self, args: DepartmentArgs) -> WorkforceResult<String> {
        let mut form = self.department_form(args.id.as_deref()).await?;
        if let Some(name) = args.name {
            form.name = name;
        }

        let department = form.into_entity()?;
        let saved = self.departments.save_or_update(&department).await?;
        Ok(saved_message(&saved))
    }

    async fn remove_department(&self, id: DepartmentId) -> WorkforceResult<String> {
        let department = self
            .departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found(Department::RESOURCE, id))?;

        self.departments.remove(&department).await?;
        Ok(format!("Department {} removed", id))
    }

    async fn list_sellers(&self, department: Option<DepartmentId>) -> WorkforceResult<String> {
        let sellers = match department {
            Some(id) => {
                let department = self
                    .departments
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| WorkforceError::not_found(Department::RESOURCE, id))?;
                self.sellers.find_by_department(&department).await?
            }
            None => self.sellers.find_all().await?,
        };
        Ok(render::seller_table(&sellers))
    }

    async fn save_seller(&self, args: SellerArgs) -> WorkforceResult<String> {
        let mut form = self.seller_form(args.id.as_deref()).await?;
        if let Some(name) = args.name {
            form.name = name;
        }
        if let Some(email) = args.email {
            form.email = email;
        }
        if let Some(birth_date) = args.birth_date {
            form.birth_date = birth_date;
        }
        if let Some(base_salary) = args.base_salary {
            form.base_salary = base_salary;
        }
        if let Some(department) = args.department {
            form.department = self.select_department(&department).await?;
        }

        let seller = form.into_entity()?;
        let saved = self.sellers.save_or_update(&seller).await?;
        Ok(saved_message(&saved))
    }

    async fn remove_seller(&self, id: SellerId) -> WorkforceResult<String> {
        let seller = self
            .sellers
            .find_by_id(id)
            .await?
            .ok_or_else(|| WorkforceError::not_found(Seller::RESOURCE, id))?;

        self.sellers.remove(&seller).await?;
        Ok(format!("Seller {} removed", id))
    }

    /// Starts from the stored department when `id` names one.
    async fn department_form(&self, id: Option<&str>) -> WorkforceResult<DepartmentForm> {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            return Ok(DepartmentForm::default());
        };
        if let Ok(department_id) = id.parse::<DepartmentId>() {
            if let Some(existing) = self.departments.find_by_id(department_id).await? {
                return Ok(DepartmentForm::from_entity(&existing));
            }
        }
        Ok(DepartmentForm {
            id: id.to_string(),
            ..DepartmentForm::default()
        })
    }

    /// Starts from the stored seller when `id` names one.
    async fn seller_form(&self, id: Option<&str>) -> WorkforceResult<SellerForm> {
        let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
            return Ok(SellerForm::default());
        };
        if let Ok(seller_id) = id.parse::<SellerId>() {
            if let Some(existing) = self.sellers.find_by_id(seller_id).await? {
                return Ok(SellerForm::from_entity(&existing));
            }
        }
        Ok(SellerForm {
            id: id.to_string(),
            ..SellerForm::default()
        })
    }

    /// Picks a department from the selector options by id.
    async fn select_department(&self, id: &str) -> WorkforceResult<Option<Department>> {
        let id = id.trim();
        if id.is_empty() {
            return Ok(None);
        }
        let department_id: DepartmentId = id.parse().map_err(|_| {
            WorkforceError::validation("department", "Department id must be an integer")
        })?;

        let options = self.departments.find_all().await?;
        options
            .into_iter()
            .find(|d| d.id == Some(department_id))
            .map(Some)
            .ok_or_else(|| {
                WorkforceError::validation("department", format!("Unknown department {}", id))
            })
    }
}

fn saved_message<E: Entity + fmt::Display>(entity: &E) -> String {
    match entity.id() {
        Some(id) => format!("{} saved: {} (id {})", E::RESOURCE, entity, id),
        None => format!("{} saved: {}", E::RESOURCE, entity),
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller").finish_non_exhaustive()
    }
}
