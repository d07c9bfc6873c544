//! Vehicles module - domain models, services, and traits for owned units.

mod vehicles_model;
mod vehicles_service;
mod vehicles_traits;

pub use vehicles_model::{NewVehicle, Vehicle};
pub use vehicles_service::VehicleService;
pub use vehicles_traits::{VehicleRepositoryTrait, VehicleServiceTrait};
