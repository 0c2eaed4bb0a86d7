//! Seller entity.

use super::Department;
use crate::traits::Entity;
use crate::SellerId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A seller assigned to a department.
///
/// The department is shared: sellers loaded by the same query that belong
/// to the same department point at one `Department` allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Database-generated identity; `None` until inserted.
    pub id: Option<SellerId>,

    /// Seller's name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Date of birth.
    pub birth_date: NaiveDate,

    /// Monthly base salary.
    pub base_salary: Decimal,

    /// Department the seller works in.
    pub department: Arc<Department>,
}

impl Seller {
    /// Creates a transient seller.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: impl Into<Arc<Department>>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department: department.into(),
        }
    }

    /// Returns a copy of this seller carrying the generated key.
    #[must_use]
    pub fn persisted(self, id: SellerId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Returns the seller's department name.
    #[must_use]
    pub fn department_name(&self) -> &str {
        &self.department.name
    }
}

impl Entity for Seller {
    type Id = SellerId;
    const RESOURCE: &'static str = "Seller";

    fn id(&self) -> Option<SellerId> {
        self.id
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DepartmentId;

    fn sample_seller() -> Seller {
        Seller::new(
            "Bob Brown",
            "bob@gmail.com",
            NaiveDate::from_ymd_opt(1998, 4, 21).unwrap(),
            Decimal::new(100_000, 2),
            Department::with_id(DepartmentId::new(1), "Computers"),
        )
    }

    #[test]
    fn test_new_seller_is_transient() {
        let seller = sample_seller();
        assert!(seller.is_transient());
        assert_eq!(seller.department_name(), "Computers");
    }

    #[test]
    fn test_persisted_keeps_fields() {
        let seller = sample_seller().persisted(SellerId::new(4));
        assert_eq!(seller.id, Some(SellerId::new(4)));
        assert_eq!(seller.email, "bob@gmail.com");
        assert_eq!(seller.base_salary.to_string(), "1000.00");
    }

    #[test]
    fn test_shared_department_compares_by_value() {
        let department = Arc::new(Department::with_id(DepartmentId::new(1), "Computers"));
        let mut a = sample_seller();
        a.department = Arc::clone(&department);
        let b = sample_seller();

        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&a.department, &department));
    }
}
