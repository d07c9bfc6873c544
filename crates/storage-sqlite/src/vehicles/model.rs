//! Database models for owned vehicles.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use lotledger_core::vehicles::{NewVehicle, Vehicle};

/// Database model for an owned vehicle
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::vehicles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct VehicleDB {
    pub id: i32,
    pub vehicle_name: String,
    pub mileage: i32,
    pub resale_value: f64,
    pub purchase_cost: f64,
    pub repair_cost: f64,
    pub part_cost: f64,
    pub misc_cost: f64,
    pub profit: f64,
}

/// Database model for inserting a vehicle. `profit` is derived by the
/// service before it reaches this layer.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::vehicles)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicleDB {
    pub vehicle_name: String,
    pub mileage: i32,
    pub resale_value: f64,
    pub purchase_cost: f64,
    pub repair_cost: f64,
    pub part_cost: f64,
    pub misc_cost: f64,
    pub profit: f64,
}

impl From<VehicleDB> for Vehicle {
    fn from(db: VehicleDB) -> Self {
        Self {
            id: db.id,
            vehicle_name: db.vehicle_name,
            mileage: db.mileage,
            resale_value: db.resale_value,
            purchase_cost: db.purchase_cost,
            repair_cost: db.repair_cost,
            part_cost: db.part_cost,
            misc_cost: db.misc_cost,
            profit: db.profit,
        }
    }
}

impl NewVehicleDB {
    pub fn from_domain(domain: NewVehicle, profit: f64) -> Self {
        Self {
            vehicle_name: domain.vehicle_name,
            mileage: domain.mileage,
            resale_value: domain.resale_value,
            purchase_cost: domain.purchase_cost,
            repair_cost: domain.repair_cost,
            part_cost: domain.part_cost,
            misc_cost: domain.misc_cost,
            profit,
        }
    }
}
