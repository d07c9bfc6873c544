use crate::errors::Result;
use crate::inquiries::inquiries_model::{NewVehicleInquiry, VehicleInquiry};
use async_trait::async_trait;

/// Trait for vehicle inquiry repository operations.
///
/// There is deliberately no update operation; corrections are
/// delete-and-recreate.
#[async_trait]
pub trait InquiryRepositoryTrait: Send + Sync {
    /// Loads all inquiries in ascending id order.
    fn load_inquiries(&self) -> Result<Vec<VehicleInquiry>>;

    /// Returns whether an inquiry with the given id exists.
    fn inquiry_exists(&self, inquiry_id: i32) -> Result<bool>;

    /// Inserts a new inquiry with the already-derived `max_bid` and returns
    /// the stored record.
    async fn insert_inquiry(
        &self,
        new_inquiry: NewVehicleInquiry,
        max_bid: f64,
    ) -> Result<VehicleInquiry>;

    /// Deletes by id, returning the number of rows removed. Deleting a
    /// nonexistent id is a no-op returning `Ok(0)`. Ledger entries owned by
    /// the inquiry are removed in the same unit of work.
    async fn delete_inquiry(&self, inquiry_id: i32) -> Result<usize>;
}

/// Trait for vehicle inquiry service operations.
#[async_trait]
pub trait InquiryServiceTrait: Send + Sync {
    fn get_inquiries(&self) -> Result<Vec<VehicleInquiry>>;
    async fn create_inquiry(&self, new_inquiry: NewVehicleInquiry) -> Result<VehicleInquiry>;
    async fn delete_inquiry(&self, inquiry_id: i32) -> Result<usize>;
}
