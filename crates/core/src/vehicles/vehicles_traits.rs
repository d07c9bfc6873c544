use crate::errors::Result;
use crate::vehicles::vehicles_model::{NewVehicle, Vehicle};
use async_trait::async_trait;

/// Trait for vehicle repository operations. No update operation exists;
/// corrections are delete-and-recreate.
#[async_trait]
pub trait VehicleRepositoryTrait: Send + Sync {
    /// Loads all vehicles in ascending id order.
    fn load_vehicles(&self) -> Result<Vec<Vehicle>>;

    /// Inserts a new vehicle with the already-derived `profit` and returns
    /// the stored record.
    async fn insert_vehicle(&self, new_vehicle: NewVehicle, profit: f64) -> Result<Vehicle>;

    /// Deletes by id; a nonexistent id is a no-op returning `Ok(0)`.
    async fn delete_vehicle(&self, vehicle_id: i32) -> Result<usize>;
}

/// Trait for vehicle service operations.
#[async_trait]
pub trait VehicleServiceTrait: Send + Sync {
    fn get_vehicles(&self) -> Result<Vec<Vehicle>>;
    async fn create_vehicle(&self, new_vehicle: NewVehicle) -> Result<Vehicle>;
    async fn delete_vehicle(&self, vehicle_id: i32) -> Result<usize>;
}
