//! SQLite storage implementation for the per-inquiry parts ledger.

mod model;
mod repository;

pub use model::{LedgerEntryDB, NewLedgerEntryDB};
pub use repository::LedgerRepository;
