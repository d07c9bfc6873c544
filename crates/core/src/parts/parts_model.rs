//! Parts catalog domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A part in the global catalog. Vendor is free text here, unlike ledger
/// entries where the vendor is one of a known set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: i32,
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
}

/// Input model for adding a catalog part.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewPart {
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
}
