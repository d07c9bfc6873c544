//! SQLite implementation of whole-store maintenance operations.

mod repository;

pub use repository::MaintenanceRepository;
