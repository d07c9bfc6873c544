use lotledger_core::inquiries::{InquiryRepositoryTrait, NewVehicleInquiry, VehicleInquiry};
use lotledger_core::Result;

use super::model::{NewVehicleInquiryDB, VehicleInquiryDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::vehicle_inquiries;
use crate::schema::vehicle_inquiries::dsl::*;
use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct InquiryRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl InquiryRepository {
    pub fn new(
        pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        InquiryRepository { pool, writer }
    }
}

#[async_trait]
impl InquiryRepositoryTrait for InquiryRepository {
    fn load_inquiries(&self) -> Result<Vec<VehicleInquiry>> {
        let mut conn = get_connection(&self.pool)?;
        let inquiries_db = vehicle_inquiries
            .order(id.asc())
            .load::<VehicleInquiryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(inquiries_db.into_iter().map(VehicleInquiry::from).collect())
    }

    fn inquiry_exists(&self, inquiry_id: i32) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(exists(vehicle_inquiries.filter(id.eq(inquiry_id))))
            .get_result::<bool>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(found)
    }

    async fn insert_inquiry(
        &self,
        new_inquiry: NewVehicleInquiry,
        bid: f64,
    ) -> Result<VehicleInquiry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<VehicleInquiry> {
                let new_inquiry_db = NewVehicleInquiryDB::from_domain(new_inquiry, bid);
                let result_db = diesel::insert_into(vehicle_inquiries::table)
                    .values(&new_inquiry_db)
                    .returning(VehicleInquiryDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(VehicleInquiry::from(result_db))
            })
            .await
    }

    // Ledger entries of this inquiry go with it in the same transaction:
    // the writer actor wraps the delete, and the schema cascades on
    // inquiry_id.
    async fn delete_inquiry(&self, inquiry_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(vehicle_inquiries.find(inquiry_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
