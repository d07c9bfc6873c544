use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::vehicles_model::{NewVehicle, Vehicle};
use super::vehicles_traits::{VehicleRepositoryTrait, VehicleServiceTrait};
use crate::errors::Result;
use crate::valuation;

pub struct VehicleService {
    vehicle_repository: Arc<dyn VehicleRepositoryTrait>,
}

impl VehicleService {
    pub fn new(vehicle_repository: Arc<dyn VehicleRepositoryTrait>) -> Self {
        VehicleService { vehicle_repository }
    }
}

#[async_trait]
impl VehicleServiceTrait for VehicleService {
    fn get_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.vehicle_repository.load_vehicles()
    }

    /// Derives profit from the cost components and persists the record.
    async fn create_vehicle(&self, new_vehicle: NewVehicle) -> Result<Vehicle> {
        let total_cost = valuation::total_cost(
            new_vehicle.purchase_cost,
            new_vehicle.repair_cost,
            new_vehicle.part_cost,
            new_vehicle.misc_cost,
        );
        let profit = valuation::profit(new_vehicle.resale_value, total_cost);
        debug!(
            "Creating vehicle '{}' with profit {:.2}",
            new_vehicle.vehicle_name, profit
        );
        self.vehicle_repository
            .insert_vehicle(new_vehicle, profit)
            .await
    }

    async fn delete_vehicle(&self, vehicle_id: i32) -> Result<usize> {
        self.vehicle_repository.delete_vehicle(vehicle_id).await
    }
}
