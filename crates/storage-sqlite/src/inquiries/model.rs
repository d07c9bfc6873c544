//! Database models for vehicle inquiries.
//!
//! The damage category is stored as its display string ("Front-End", ...);
//! unknown values decode to `DamageCategory::Other` rather than failing the
//! read.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lotledger_core::inquiries::{DamageCategory, NewVehicleInquiry, VehicleInquiry};

/// Database model for a vehicle inquiry
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::vehicle_inquiries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct VehicleInquiryDB {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub miles: i32,
    pub damage: String,
    pub airbags_deployed: bool,
    pub expected_expenses: f64,
    pub expected_resale_value: f64,
    pub distance_to_auction: f64,
    pub desired_profit: f64,
    pub max_bid: f64,
    pub auction_url: String,
}

/// Database model for inserting an inquiry. `max_bid` is derived by the
/// service before it reaches this layer.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::vehicle_inquiries)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleInquiryDB {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub miles: i32,
    pub damage: String,
    pub airbags_deployed: bool,
    pub expected_expenses: f64,
    pub expected_resale_value: f64,
    pub distance_to_auction: f64,
    pub desired_profit: f64,
    pub max_bid: f64,
    pub auction_url: String,
}

impl From<VehicleInquiryDB> for VehicleInquiry {
    fn from(db: VehicleInquiryDB) -> Self {
        Self {
            id: db.id,
            make: db.make,
            model: db.model,
            year: db.year,
            miles: db.miles,
            damage: DamageCategory::from(db.damage.as_str()),
            airbags_deployed: db.airbags_deployed,
            expected_expenses: db.expected_expenses,
            expected_resale_value: db.expected_resale_value,
            distance_to_auction: db.distance_to_auction,
            desired_profit: db.desired_profit,
            max_bid: db.max_bid,
            auction_url: db.auction_url,
        }
    }
}

impl NewVehicleInquiryDB {
    pub fn from_domain(domain: NewVehicleInquiry, max_bid: f64) -> Self {
        Self {
            make: domain.make,
            model: domain.model,
            year: domain.year,
            miles: domain.miles,
            damage: domain.damage.as_str().to_string(),
            airbags_deployed: domain.airbags_deployed,
            expected_expenses: domain.expected_expenses,
            expected_resale_value: domain.expected_resale_value,
            distance_to_auction: domain.distance_to_auction,
            desired_profit: domain.desired_profit,
            max_bid,
            auction_url: domain.auction_url,
        }
    }
}
