//! Database models for the parts catalog.

use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for a catalog part
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::parts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct PartDB {
    pub id: i32,
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
}

/// Database model for inserting a catalog part; the id is assigned by the
/// database.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::parts)]
#[serde(rename_all = "camelCase")]
pub struct NewPartDB {
    pub part_name: String,
    pub vendor: String,
    pub cost: f64,
    pub date_ordered: NaiveDate,
}

// Conversion to and from domain models
impl From<PartDB> for lotledger_core::parts::Part {
    fn from(db: PartDB) -> Self {
        Self {
            id: db.id,
            part_name: db.part_name,
            vendor: db.vendor,
            cost: db.cost,
            date_ordered: db.date_ordered,
        }
    }
}

impl From<lotledger_core::parts::NewPart> for NewPartDB {
    fn from(domain: lotledger_core::parts::NewPart) -> Self {
        Self {
            part_name: domain.part_name,
            vendor: domain.vendor,
            cost: domain.cost,
            date_ordered: domain.date_ordered,
        }
    }
}
