use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::ledger_model::{LedgerEntry, NewLedgerEntry};
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::{Error, Result};
use crate::inquiries::InquiryRepositoryTrait;

pub struct LedgerService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
    inquiry_repository: Arc<dyn InquiryRepositoryTrait>,
}

impl LedgerService {
    pub fn new(
        ledger_repository: Arc<dyn LedgerRepositoryTrait>,
        inquiry_repository: Arc<dyn InquiryRepositoryTrait>,
    ) -> Self {
        LedgerService {
            ledger_repository,
            inquiry_repository,
        }
    }
}

#[async_trait]
impl LedgerServiceTrait for LedgerService {
    fn get_entries(&self, inquiry_id: i32) -> Result<Vec<LedgerEntry>> {
        self.ledger_repository.load_entries(inquiry_id)
    }

    fn get_total_parts_cost(&self, inquiry_id: i32) -> Result<f64> {
        self.ledger_repository.total_parts_cost(inquiry_id)
    }

    /// Records a part purchase against an inquiry. The owning inquiry must
    /// exist at creation time; the schema-level foreign key is a backstop,
    /// this check gives the caller a domain error instead of a storage one.
    async fn create_entry(
        &self,
        inquiry_id: i32,
        new_entry: NewLedgerEntry,
    ) -> Result<LedgerEntry> {
        if !self.inquiry_repository.inquiry_exists(inquiry_id)? {
            return Err(Error::ConstraintViolation(format!(
                "vehicle inquiry {} does not exist",
                inquiry_id
            )));
        }
        debug!(
            "Recording part '{}' against inquiry {}",
            new_entry.part_name, inquiry_id
        );
        self.ledger_repository
            .insert_entry(inquiry_id, new_entry)
            .await
    }

    async fn delete_entry(&self, inquiry_id: i32, entry_id: i32) -> Result<usize> {
        self.ledger_repository
            .delete_entry(inquiry_id, entry_id)
            .await
    }
}
