//! Seller form.

use super::fields::{self, check, DATE_FORMAT};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use workforce_core::{
    Department, Entity, FieldErrors, Seller, SellerId, ValidateExt, WorkforceError,
    WorkforceResult, REQUIRED_FIELD_MESSAGE,
};

const NAME_MAX_CHARS: usize = 70;
const EMAIL_MAX_CHARS: usize = 60;

fn seller_name(value: &str) -> Result<(), ValidationError> {
    fields::required_text(value, NAME_MAX_CHARS)
}

fn seller_email(value: &str) -> Result<(), ValidationError> {
    fields::required_email(value, EMAIL_MAX_CHARS)
}

/// Raw seller input.
///
/// `department` is the entry picked from the department selector, which
/// is loaded from the department service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SellerForm {
    /// Blank for a new seller.
    #[validate(custom(function = "check::id"))]
    pub id: String,

    #[validate(custom(function = "seller_name"))]
    pub name: String,

    #[validate(custom(function = "seller_email"))]
    pub email: String,

    /// `dd/MM/yyyy` or `yyyy-MM-dd`.
    #[validate(custom(function = "check::date"))]
    pub birth_date: String,

    #[validate(custom(function = "check::salary"))]
    pub base_salary: String,

    pub department: Option<Department>,
}

impl SellerForm {
    /// Fills the form from an existing seller for editing.
    #[must_use]
    pub fn from_entity(seller: &Seller) -> Self {
        Self {
            id: seller.id.map(|id| id.to_string()).unwrap_or_default(),
            name: seller.name.clone(),
            email: seller.email.clone(),
            birth_date: seller.birth_date.format(DATE_FORMAT).to_string(),
            base_salary: fields::format_salary(&seller.base_salary),
            department: Some(seller.department.as_ref().clone()),
        }
    }

    /// Collects the errors of every field, including the department choice.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        let mut errors = self.validate_fields();
        if self.department.as_ref().map_or(true, Entity::is_transient) {
            errors.add("department", REQUIRED_FIELD_MESSAGE);
        }
        errors
    }

    /// Validates every field and builds the seller.
    pub fn into_entity(&self) -> WorkforceResult<Seller> {
        self.errors().into_result()?;

        let id = fields::parsed("id", fields::optional_id(&self.id))?;
        let birth_date = fields::parsed("birth_date", fields::date(&self.birth_date))?;
        let base_salary = fields::parsed("base_salary", fields::salary(&self.base_salary))?;
        let department = self
            .department
            .clone()
            .ok_or_else(|| WorkforceError::validation("department", REQUIRED_FIELD_MESSAGE))?;

        Ok(Seller {
            id: id.map(SellerId::new),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            birth_date,
            base_salary,
            department: department.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use workforce_core::DepartmentId;

    fn filled_form() -> SellerForm {
        SellerForm {
            id: String::new(),
            name: "Bob Brown".to_string(),
            email: "bob@gmail.com".to_string(),
            birth_date: "21/04/1998".to_string(),
            base_salary: "3000".to_string(),
            department: Some(Department::with_id(DepartmentId::new(1), "IT")),
        }
    }

    #[test]
    fn test_valid_form_builds_transient_seller() {
        let seller = filled_form().into_entity().unwrap();

        assert!(seller.id.is_none());
        assert_eq!(seller.birth_date, NaiveDate::from_ymd_opt(1998, 4, 21).unwrap());
        assert_eq!(seller.base_salary, Decimal::new(3000, 0));
        assert_eq!(seller.department_name(), "IT");
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = SellerForm::default().errors();

        for field in ["name", "email", "birth_date", "base_salary", "department"] {
            assert_eq!(errors.get(field), Some(REQUIRED_FIELD_MESSAGE), "{field}");
        }
        assert!(!errors.contains("id"));
    }

    #[test]
    fn test_invalid_values() {
        let form = SellerForm {
            email: "not-an-email".to_string(),
            birth_date: "1998/21/04".to_string(),
            base_salary: "-10".to_string(),
            ..filled_form()
        };

        let err = form.into_entity().unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("email"), Some("Invalid email address"));
        assert_eq!(fields.get("base_salary"), Some("Salary can't be negative"));
        assert!(fields.contains("birth_date"));
    }

    #[test]
    fn test_length_limits() {
        let form = SellerForm {
            name: "n".repeat(71),
            email: format!("{}@gmail.com", "e".repeat(60)),
            ..filled_form()
        };

        let errors = form.errors();
        assert_eq!(errors.get("name"), Some("Field can't exceed 70 characters"));
        assert_eq!(errors.get("email"), Some("Field can't exceed 60 characters"));
    }

    #[test]
    fn test_transient_department_is_rejected() {
        let form = SellerForm {
            department: Some(Department::new("Unsaved")),
            ..filled_form()
        };

        assert!(form.errors().contains("department"));
    }

    #[test]
    fn test_from_entity_formats_for_editing() {
        let seller = Seller::new(
            "Ana",
            "ana@gmail.com",
            NaiveDate::from_ymd_opt(1985, 11, 3).unwrap(),
            Decimal::new(25005, 1),
            Department::with_id(DepartmentId::new(2), "Books"),
        )
        .persisted(SellerId::new(5));

        let form = SellerForm::from_entity(&seller);
        assert_eq!(form.id, "5");
        assert_eq!(form.birth_date, "03/11/1985");
        assert_eq!(form.base_salary, "2500.50");

        assert_eq!(form.into_entity().unwrap(), seller);
    }

    #[test]
    fn test_editing_other_fields_keeps_salary() {
        let saved = SellerForm {
            base_salary: "2500.55".to_string(),
            ..filled_form()
        }
        .into_entity()
        .unwrap()
        .persisted(SellerId::new(1));

        let mut form = SellerForm::from_entity(&saved);
        form.name = "Bob Black".to_string();
        let edited = form.into_entity().unwrap();

        assert_eq!(edited.base_salary, saved.base_salary);
        assert_eq!(edited.base_salary.to_string(), "2500.55");
    }

    #[test]
    fn test_salary_with_three_decimals_is_rejected() {
        let form = SellerForm {
            base_salary: "2500.555".to_string(),
            ..filled_form()
        };

        let errors = form.errors();
        assert_eq!(
            errors.get("base_salary"),
            Some("Salary can't have more than 2 decimal places")
        );
    }
}
