//! SQLite storage implementation for owned vehicles.

mod model;
mod repository;

pub use model::{NewVehicleDB, VehicleDB};
pub use repository::VehicleRepository;
