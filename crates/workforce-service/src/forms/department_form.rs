//! Department form.

use super::fields::{self, check};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use workforce_core::{Department, DepartmentId, ValidateExt, WorkforceResult};

const NAME_MAX_CHARS: usize = 30;

fn department_name(value: &str) -> Result<(), ValidationError> {
    fields::required_text(value, NAME_MAX_CHARS)
}

/// Raw department input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct DepartmentForm {
    /// Blank for a new department.
    #[validate(custom(function = "check::id"))]
    pub id: String,

    #[validate(custom(function = "department_name"))]
    pub name: String,
}

impl DepartmentForm {
    /// Creates a form for a new department.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
        }
    }

    /// Fills the form from an existing department for editing.
    #[must_use]
    pub fn from_entity(department: &Department) -> Self {
        Self {
            id: department.id.map(|id| id.to_string()).unwrap_or_default(),
            name: department.name.clone(),
        }
    }

    /// Validates every field and builds the department.
    pub fn into_entity(&self) -> WorkforceResult<Department> {
        self.validate_form()?;

        let id = fields::parsed("id", fields::optional_id(&self.id))?;
        Ok(Department {
            id: id.map(DepartmentId::new),
            name: self.name.trim().to_string(),
        })
    }
}
