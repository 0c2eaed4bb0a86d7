//! Form types for the presentation layer.
//!
//! A form holds raw text as typed by the user. `into_entity` validates
//! every field at once and either builds the entity or returns
//! [`WorkforceError::Validation`] with one message per offending field.
//!
//! [`WorkforceError::Validation`]: workforce_core::WorkforceError::Validation

mod department_form;
mod fields;
mod seller_form;

pub use department_form::DepartmentForm;
pub use fields::{format_salary, DATE_FORMAT};
pub use seller_form::SellerForm;
