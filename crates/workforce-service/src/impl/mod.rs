//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `seller_service.rs`).

pub mod department_service_impl;
pub mod seller_service_impl;

pub use department_service_impl::DepartmentServiceImpl;
pub use seller_service_impl::SellerServiceImpl;
