//! Vehicle domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a completed/owned unit in inventory.
/// `profit` is derived at creation time (resale value minus total cost) and
/// stored; the individual cost components remain alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
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

/// Input model for adding a vehicle to inventory.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub vehicle_name: String,
    pub mileage: i32,
    pub resale_value: f64,
    pub purchase_cost: f64,
    pub repair_cost: f64,
    pub part_cost: f64,
    pub misc_cost: f64,
}
