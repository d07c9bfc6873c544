//! SQLite storage implementation for the parts catalog.

mod model;
mod repository;

pub use model::{NewPartDB, PartDB};
pub use repository::PartRepository;
