//! # Workforce Service
//!
//! Service façades over the department and seller DAOs, plus the form
//! types the presentation layer validates before calling them.

pub mod department_service;
pub mod forms;
pub mod r#impl;
pub mod seller_service;

pub use department_service::*;
pub use forms::*;
pub use r#impl::{DepartmentServiceImpl, SellerServiceImpl};
pub use seller_service::*;
