use lotledger_core::ledger::{LedgerEntry, LedgerRepositoryTrait, NewLedgerEntry};
use lotledger_core::Result;

use super::model::{LedgerEntryDB, NewLedgerEntryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::ledger_entries;
use crate::schema::ledger_entries::dsl::*;
use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct LedgerRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl LedgerRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        LedgerRepository { pool, writer }
    }
}

#[async_trait]
impl LedgerRepositoryTrait for LedgerRepository {
    fn load_entries(&self, owning_inquiry_id: i32) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let entries_db = ledger_entries
            .filter(inquiry_id.eq(owning_inquiry_id))
            .order(id.asc())
            .load::<LedgerEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(entries_db.into_iter().map(LedgerEntry::from).collect())
    }

    fn total_parts_cost(&self, owning_inquiry_id: i32) -> Result<f64> {
        let mut conn = get_connection(&self.pool)?;
        let total: Option<f64> = ledger_entries
            .filter(inquiry_id.eq(owning_inquiry_id))
            .select(sum(cost))
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(total.unwrap_or(0.0))
    }

    async fn insert_entry(
        &self,
        owning_inquiry_id: i32,
        new_entry: NewLedgerEntry,
    ) -> Result<LedgerEntry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<LedgerEntry> {
                let new_entry_db = NewLedgerEntryDB::from_domain(owning_inquiry_id, new_entry);
                let result_db = diesel::insert_into(ledger_entries::table)
                    .values(&new_entry_db)
                    .returning(LedgerEntryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(LedgerEntry::from(result_db))
            })
            .await
    }

    // Scoped to the owning inquiry: an entry id belonging to a different
    // inquiry is treated the same as a missing id (no-op).
    async fn delete_entry(&self, owning_inquiry_id: i32, entry_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    ledger_entries
                        .filter(inquiry_id.eq(owning_inquiry_id))
                        .filter(id.eq(entry_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
