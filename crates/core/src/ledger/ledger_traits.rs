use crate::errors::Result;
use crate::ledger::ledger_model::{LedgerEntry, NewLedgerEntry};
use async_trait::async_trait;

/// Trait for ledger repository operations. Every operation is scoped to one
/// owning inquiry id; entries of other inquiries are never visible through it.
#[async_trait]
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Loads the entries of one inquiry in ascending id order.
    fn load_entries(&self, inquiry_id: i32) -> Result<Vec<LedgerEntry>>;

    /// Sum of `cost` over the entries of one inquiry; 0.0 when there are none.
    fn total_parts_cost(&self, inquiry_id: i32) -> Result<f64>;

    async fn insert_entry(&self, inquiry_id: i32, new_entry: NewLedgerEntry)
        -> Result<LedgerEntry>;

    /// Deletes one entry of one inquiry; ids not present under that inquiry
    /// are a no-op returning `Ok(0)`.
    async fn delete_entry(&self, inquiry_id: i32, entry_id: i32) -> Result<usize>;
}

/// Trait for ledger service operations.
#[async_trait]
pub trait LedgerServiceTrait: Send + Sync {
    fn get_entries(&self, inquiry_id: i32) -> Result<Vec<LedgerEntry>>;
    fn get_total_parts_cost(&self, inquiry_id: i32) -> Result<f64>;
    async fn create_entry(&self, inquiry_id: i32, new_entry: NewLedgerEntry)
        -> Result<LedgerEntry>;
    async fn delete_entry(&self, inquiry_id: i32, entry_id: i32) -> Result<usize>;
}
