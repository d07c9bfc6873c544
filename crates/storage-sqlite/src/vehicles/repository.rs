use lotledger_core::vehicles::{NewVehicle, Vehicle, VehicleRepositoryTrait};
use lotledger_core::Result;

use super::model::{NewVehicleDB, VehicleDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::vehicles;
use crate::schema::vehicles::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct VehicleRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl VehicleRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        VehicleRepository { pool, writer }
    }
}

#[async_trait]
impl VehicleRepositoryTrait for VehicleRepository {
    fn load_vehicles(&self) -> Result<Vec<Vehicle>> {
        let mut conn = get_connection(&self.pool)?;
        let vehicles_db = vehicles
            .order(id.asc())
            .load::<VehicleDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(vehicles_db.into_iter().map(Vehicle::from).collect())
    }

    async fn insert_vehicle(&self, new_vehicle: NewVehicle, vehicle_profit: f64) -> Result<Vehicle> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vehicle> {
                let new_vehicle_db = NewVehicleDB::from_domain(new_vehicle, vehicle_profit);
                let result_db = diesel::insert_into(vehicles::table)
                    .values(&new_vehicle_db)
                    .returning(VehicleDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Vehicle::from(result_db))
            })
            .await
    }

    async fn delete_vehicle(&self, vehicle_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(vehicles.find(vehicle_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use lotledger_core::valuation;
    use lotledger_core::vehicles::{VehicleService, VehicleServiceTrait};
    use tempfile::tempdir;

    async fn create_test_repository() -> (Arc<VehicleRepository>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (
            Arc::new(VehicleRepository::new(Arc::clone(&pool), writer)),
            temp_dir,
        )
    }

    fn test_vehicle() -> NewVehicle {
        NewVehicle {
            vehicle_name: "2016 Challenger".to_string(),
            mileage: 70_000,
            resale_value: 18_000.0,
            purchase_cost: 9_000.0,
            repair_cost: 2_500.0,
            part_cost: 1_800.0,
            misc_cost: 700.0,
        }
    }

    #[tokio::test]
    async fn test_round_trip_with_derived_profit() {
        let (repo, _dir) = create_test_repository().await;
        let service = VehicleService::new(repo.clone());

        let created = service.create_vehicle(test_vehicle()).await.unwrap();

        // Stored profit must match an independent derivation.
        let expected = valuation::profit(
            18_000.0,
            valuation::total_cost(9_000.0, 2_500.0, 1_800.0, 700.0),
        );
        assert_eq!(created.profit, expected);

        let loaded = repo.load_vehicles().unwrap();
        assert_eq!(loaded, vec![created]);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let (repo, _dir) = create_test_repository().await;
        repo.insert_vehicle(test_vehicle(), 4000.0).await.unwrap();

        assert_eq!(repo.delete_vehicle(1234).await.unwrap(), 0);
        assert_eq!(repo.load_vehicles().unwrap().len(), 1);
    }
}
