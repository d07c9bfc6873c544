//! Ledger module - part purchases attributed to a single vehicle inquiry.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::{LedgerEntry, NewLedgerEntry, Vendor};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
