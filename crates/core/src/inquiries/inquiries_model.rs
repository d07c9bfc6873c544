//! Vehicle inquiry domain models.

use serde::{Deserialize, Serialize};

use crate::valuation;

/// Damage category reported for a candidate vehicle.
///
/// The serialized form matches the storage encoding ("Front-End", "Rear-End",
/// ...). Unknown stored values decode leniently to [`DamageCategory::Other`]
/// rather than failing the whole read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageCategory {
    #[serde(rename = "Front-End")]
    FrontEnd,
    #[serde(rename = "Rear-End")]
    RearEnd,
    Side,
    Roof,
    Flood,
    Other,
}

impl DamageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageCategory::FrontEnd => "Front-End",
            DamageCategory::RearEnd => "Rear-End",
            DamageCategory::Side => "Side",
            DamageCategory::Roof => "Roof",
            DamageCategory::Flood => "Flood",
            DamageCategory::Other => "Other",
        }
    }
}

impl From<&str> for DamageCategory {
    fn from(value: &str) -> Self {
        match value {
            "Front-End" => DamageCategory::FrontEnd,
            "Rear-End" => DamageCategory::RearEnd,
            "Side" => DamageCategory::Side,
            "Roof" => DamageCategory::Roof,
            "Flood" => DamageCategory::Flood,
            _ => DamageCategory::Other,
        }
    }
}

/// Domain model representing a candidate vehicle under evaluation, not yet
/// owned. `max_bid` is derived at creation time and stored; it is never
/// recomputed or mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInquiry {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub miles: i32,
    pub damage: DamageCategory,
    pub airbags_deployed: bool,
    pub expected_expenses: f64,
    pub expected_resale_value: f64,
    pub distance_to_auction: f64,
    pub desired_profit: f64,
    pub max_bid: f64,
    pub auction_url: String,
}

impl VehicleInquiry {
    /// Expected resale value minus expected expenses. Computed at read time
    /// for filtering; never stored.
    pub fn profit_potential(&self) -> f64 {
        valuation::profit_potential(self.expected_resale_value, self.expected_expenses)
    }
}

/// Input model for creating a new vehicle inquiry. The scalar fields arrive
/// already range-checked by the presentation layer; `max_bid` is computed by
/// the service before persisting.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleInquiry {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub miles: i32,
    pub damage: DamageCategory,
    pub airbags_deployed: bool,
    pub expected_expenses: f64,
    pub expected_resale_value: f64,
    pub distance_to_auction: f64,
    pub desired_profit: f64,
    pub auction_url: String,
}
