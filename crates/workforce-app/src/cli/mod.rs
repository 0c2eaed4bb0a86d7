//! Command-line interface.
//!
//! Each subcommand plays the part of a list or form controller: it builds
//! a form from the arguments, validates it and calls the service layer.

mod controller;
pub mod render;

pub use controller::{Controller, Failure};

use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use workforce_core::{DepartmentId, SellerId};

/// Department and seller registry.
#[derive(Parser, Debug)]
#[command(name = "workforce", version, about = "Department and seller registry")]
pub struct Cli {
    /// Configuration directory.
    #[arg(long, global = true, env = "WORKFORCE_CONFIG_DIR", default_value = "./config")]
    pub config_dir: String,

    /// Database URL, overriding the configured one.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage departments.
    Department {
        #[command(subcommand)]
        action: DepartmentAction,
    },

    /// Manage sellers.
    Seller {
        #[command(subcommand)]
        action: SellerAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DepartmentAction {
    /// List departments ordered by name.
    List,
    /// Create a department, or update it when --id is given.
    Save(DepartmentArgs),
    /// Remove a department.
    Remove {
        /// Department id.
        id: DepartmentId,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SellerAction {
    /// List sellers ordered by name.
    List {
        /// Only sellers of this department.
        #[arg(long)]
        department: Option<DepartmentId>,
    },
    /// Create a seller, or update it when --id is given.
    Save(SellerArgs),
    /// Remove a seller.
    Remove {
        /// Seller id.
        id: SellerId,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
}

/// Question asked before a removal.
pub const DELETE_PROMPT: &str = "Are you sure to delete?";

impl Command {
    /// Removals must be confirmed unless `--yes` was given.
    #[must_use]
    pub fn needs_confirmation(&self) -> bool {
        match self {
            Self::Department {
                action: DepartmentAction::Remove { yes, .. },
            }
            | Self::Seller {
                action: SellerAction::Remove { yes, .. },
            } => !yes,
            _ => false,
        }
    }
}

/// Asks [`DELETE_PROMPT`] and reads the answer. Only `y` or `yes` confirms.
pub fn confirm(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{DELETE_PROMPT} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Department form fields.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,
}

/// Seller form fields.
///
/// When --id names an existing seller, omitted fields keep their
/// current values.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerArgs {
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// dd/MM/yyyy
    #[arg(long)]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub base_salary: Option<String>,

    /// Department id.
    #[arg(long)]
    pub department: Option<String>,
}
