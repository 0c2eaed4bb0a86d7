//! Domain entities.

mod department;
mod seller;

pub use department::*;
pub use seller::*;
