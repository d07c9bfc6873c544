//! SQLite storage implementation for LotLedger.
//!
//! This crate provides all database-related functionality using Diesel with
//! SQLite. It implements the repository traits defined in `lotledger-core`
//! and contains:
//! - Database connection pooling and lifecycle management
//! - Embedded Diesel migrations (the schema manager)
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!       storage-sqlite (this crate)
//!                │
//!                ▼
//!            SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod inquiries;
pub mod ledger;
pub mod maintenance;
pub mod parts;
pub mod vehicles;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from lotledger-core for convenience
pub use lotledger_core::errors::{DatabaseError, Error, Result};
