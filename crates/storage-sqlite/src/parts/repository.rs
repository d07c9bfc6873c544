use lotledger_core::parts::{NewPart, Part, PartRepositoryTrait};
use lotledger_core::Result;

use super::model::{NewPartDB, PartDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::parts;
use crate::schema::parts::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct PartRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl PartRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        PartRepository { pool, writer }
    }
}

#[async_trait]
impl PartRepositoryTrait for PartRepository {
    fn load_parts(&self) -> Result<Vec<Part>> {
        let mut conn = get_connection(&self.pool)?;
        let parts_db = parts
            .order(id.asc())
            .load::<PartDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(parts_db.into_iter().map(Part::from).collect())
    }

    async fn insert_part(&self, new_part: NewPart) -> Result<Part> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Part> {
                let new_part_db: NewPartDB = new_part.into();
                let result_db = diesel::insert_into(parts::table)
                    .values(&new_part_db)
                    .returning(PartDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Part::from(result_db))
            })
            .await
    }

    // Deleting an id that does not exist is a documented no-op; the row
    // count simply comes back as 0.
    async fn delete_part(&self, part_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(parts.find(part_id))
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
    use chrono::NaiveDate;
    use tempfile::tempdir;

    async fn create_test_repository() -> (PartRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (PartRepository::new(Arc::clone(&pool), writer), temp_dir)
    }

    fn test_part(name: &str) -> NewPart {
        NewPart {
            part_name: name.to_string(),
            vendor: "RockAuto".to_string(),
            cost: 45.0,
            date_ordered: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_load_round_trip() {
        let (repo, _dir) = create_test_repository().await;

        let part = repo.insert_part(test_part("Oil filter")).await.unwrap();
        assert_eq!(part.part_name, "Oil filter");
        assert_eq!(part.vendor, "RockAuto");
        assert_eq!(part.cost, 45.0);

        let loaded = repo.load_parts().unwrap();
        assert_eq!(loaded, vec![part]);
    }

    #[tokio::test]
    async fn test_ids_ascend_in_listing() {
        let (repo, _dir) = create_test_repository().await;

        repo.insert_part(test_part("A")).await.unwrap();
        repo.insert_part(test_part("B")).await.unwrap();
        repo.insert_part(test_part("C")).await.unwrap();

        let ids: Vec<i32> = repo.load_parts().unwrap().iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_is_noop() {
        let (repo, _dir) = create_test_repository().await;
        repo.insert_part(test_part("A")).await.unwrap();

        let removed = repo.delete_part(9999).await.unwrap();
        assert_eq!(removed, 0);
        assert_eq!(repo.load_parts().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let (repo, _dir) = create_test_repository().await;
        let part = repo.insert_part(test_part("A")).await.unwrap();

        assert_eq!(repo.delete_part(part.id).await.unwrap(), 1);
        assert!(repo.load_parts().unwrap().is_empty());
    }
}
