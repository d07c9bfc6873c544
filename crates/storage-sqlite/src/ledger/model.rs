//! Database models for ledger entries.
//!
//! All inquiries share one physical table; the owning inquiry is a foreign
//! key column, not a table name. The vendor is stored as its display string
//! ("Salvage Lot", "eBay", ...); unknown values decode to `Vendor::Other`.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inquiries::VehicleInquiryDB;
use lotledger_core::ledger::{LedgerEntry, NewLedgerEntry, Vendor};

/// Database model for a ledger entry
#[derive(
    Queryable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(VehicleInquiryDB, foreign_key = inquiry_id))]
#[diesel(table_name = crate::schema::ledger_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryDB {
    pub id: i32,
    pub inquiry_id: i32,
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
    pub notes: Option<String>,
}

/// Database model for inserting a ledger entry.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::ledger_entries)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntryDB {
    pub inquiry_id: i32,
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
    pub notes: Option<String>,
}

impl From<LedgerEntryDB> for LedgerEntry {
    fn from(db: LedgerEntryDB) -> Self {
        Self {
            id: db.id,
            inquiry_id: db.inquiry_id,
            part_name: db.part_name,
            vendor: Vendor::from(db.vendor.as_str()),
            cost: db.cost,
            date_ordered: db.date_ordered,
            notes: db.notes,
        }
    }
}

impl NewLedgerEntryDB {
    pub fn from_domain(owning_inquiry_id: i32, domain: NewLedgerEntry) -> Self {
        Self {
            inquiry_id: owning_inquiry_id,
            part_name: domain.part_name,
            vendor: domain.vendor.as_str().to_string(),
            cost: domain.cost,
            date_ordered: domain.date_ordered,
            notes: domain.notes,
        }
    }
}
