//! Maintenance module - wholesale database cleanup.

mod maintenance_traits;

pub use maintenance_traits::MaintenanceRepositoryTrait;
