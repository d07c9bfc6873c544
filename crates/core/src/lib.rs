//! LotLedger Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for LotLedger, a vehicle
//! reconditioning ledger for a small dealership. It is database-agnostic
//! and defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod inquiries;
pub mod ledger;
pub mod maintenance;
pub mod parts;
pub mod valuation;
pub mod vehicles;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
