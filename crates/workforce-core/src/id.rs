//! Typed ID wrappers for persisted entities.
//!
//! Identities are assigned by the database on insert, so they wrap the
//! generated integer key rather than a client-side UUID.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// A strongly-typed wrapper for department IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub i64);

impl DepartmentId {
    /// Wraps a database-generated key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DepartmentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for DepartmentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<DepartmentId> for i64 {
    fn from(id: DepartmentId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for seller IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(pub i64);

impl SellerId {
    /// Wraps a database-generated key.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner key.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SellerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for SellerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<SellerId> for i64 {
    fn from(id: SellerId) -> Self {
        id.0
    }
}
