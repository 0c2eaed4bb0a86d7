//! Department entity.

use crate::traits::Entity;
use crate::DepartmentId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A department that sellers belong to.
///
/// Equality covers both identity and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Department {
    /// Database-generated identity; `None` until inserted.
    pub id: Option<DepartmentId>,

    /// Department name.
    pub name: String,
}

impl Department {
    /// Creates a transient department.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a department with a known identity.
    #[must_use]
    pub fn with_id(id: DepartmentId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns a copy of this department carrying the generated key.
    #[must_use]
    pub fn persisted(self, id: DepartmentId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

impl Entity for Department {
    type Id = DepartmentId;
    const RESOURCE: &'static str = "Department";

    fn id(&self) -> Option<DepartmentId> {
        self.id
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
