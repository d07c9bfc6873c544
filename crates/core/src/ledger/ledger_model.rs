//! Ledger domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Vendor a ledger part was bought from. The serialized form matches the
/// storage encoding; unknown stored values decode to [`Vendor::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vendor {
    Partify,
    #[serde(rename = "eBay")]
    Ebay,
    #[serde(rename = "CARiD")]
    Carid,
    Amazon,
    #[serde(rename = "Salvage Lot")]
    SalvageLot,
    Other,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Partify => "Partify",
            Vendor::Ebay => "eBay",
            Vendor::Carid => "CARiD",
            Vendor::Amazon => "Amazon",
            Vendor::SalvageLot => "Salvage Lot",
            Vendor::Other => "Other",
        }
    }
}

impl From<&str> for Vendor {
    fn from(value: &str) -> Self {
        match value {
            "Partify" => Vendor::Partify,
            "eBay" => Vendor::Ebay,
            "CARiD" => Vendor::Carid,
            "Amazon" => Vendor::Amazon,
            "Salvage Lot" => Vendor::SalvageLot,
            _ => Vendor::Other,
        }
    }
}

/// A single part purchase attributed to exactly one vehicle inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: i32,
    pub inquiry_id: i32,
    pub part_name: String,
    pub vendor: Vendor,
    pub cost: f64,
    pub date_ordered: NaiveDate,
    pub notes: Option<String>,
}

/// Input model for recording a part purchase. The owning inquiry id is
/// supplied separately to the ledger operations.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntry {
    pub part_name: String,
    pub vendor: Vendor,
    pub cost: f64,
    pub date_ordered: NaiveDate,
    pub notes: Option<String>,
}
