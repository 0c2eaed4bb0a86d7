//! # Workforce Application
//!
//! Dependency injection wiring, logging setup and the command-line
//! controllers for departments and sellers.

pub mod cli;
pub mod di;
pub mod startup;
