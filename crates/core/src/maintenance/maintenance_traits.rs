use crate::errors::Result;
use async_trait::async_trait;

/// Trait for maintenance operations on the whole store.
#[async_trait]
pub trait MaintenanceRepositoryTrait: Send + Sync {
    /// Removes every row from every table in a single transaction. The
    /// schema itself is left in place.
    async fn purge_all(&self) -> Result<()>;
}
