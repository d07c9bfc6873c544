use lotledger_core::maintenance::MaintenanceRepositoryTrait;
use lotledger_core::Result;

use crate::db::WriteHandle;
use crate::errors::StorageError;
use crate::schema::{ledger_entries, parts, vehicle_inquiries, vehicles};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::warn;

pub struct MaintenanceRepository {
    writer: WriteHandle,
}

impl MaintenanceRepository {
    pub fn new(writer: WriteHandle) -> Self {
        MaintenanceRepository { writer }
    }
}

#[async_trait]
impl MaintenanceRepositoryTrait for MaintenanceRepository {
    /// Clears every table in one transaction (the writer actor wraps the
    /// job). Ledger entries go first, though the cascade would cover them.
    async fn purge_all(&self) -> Result<()> {
        warn!("Purging all rows from every table");
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::delete(ledger_entries::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(vehicle_inquiries::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(vehicles::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                diesel::delete(parts::table)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use crate::inquiries::InquiryRepository;
    use crate::parts::PartRepository;
    use chrono::NaiveDate;
    use lotledger_core::inquiries::{
        DamageCategory, InquiryRepositoryTrait, NewVehicleInquiry,
    };
    use lotledger_core::parts::{NewPart, PartRepositoryTrait};
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_purge_all_empties_every_table() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        let part_repo = PartRepository::new(Arc::clone(&pool), writer.clone());
        let inquiry_repo = InquiryRepository::new(Arc::clone(&pool), writer.clone());
        let maintenance = MaintenanceRepository::new(writer);

        part_repo
            .insert_part(NewPart {
                part_name: "Radiator".to_string(),
                vendor: "CARiD".to_string(),
                cost: 200.0,
                date_ordered: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            })
            .await
            .unwrap();
        inquiry_repo
            .insert_inquiry(
                NewVehicleInquiry {
                    make: "Honda".to_string(),
                    model: "Civic".to_string(),
                    year: 2021,
                    miles: 30_000,
                    damage: DamageCategory::Side,
                    airbags_deployed: false,
                    expected_expenses: 2_500.0,
                    expected_resale_value: 12_000.0,
                    distance_to_auction: 150.0,
                    desired_profit: 2_000.0,
                    auction_url: String::new(),
                },
                7_440.0,
            )
            .await
            .unwrap();

        maintenance.purge_all().await.unwrap();

        assert!(part_repo.load_parts().unwrap().is_empty());
        assert!(inquiry_repo.load_inquiries().unwrap().is_empty());
    }
}
