use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::inquiries_model::{NewVehicleInquiry, VehicleInquiry};
use super::inquiries_traits::{InquiryRepositoryTrait, InquiryServiceTrait};
use crate::errors::Result;
use crate::valuation;

pub struct InquiryService {
    inquiry_repository: Arc<dyn InquiryRepositoryTrait>,
}

impl InquiryService {
    pub fn new(inquiry_repository: Arc<dyn InquiryRepositoryTrait>) -> Self {
        InquiryService { inquiry_repository }
    }
}

#[async_trait]
impl InquiryServiceTrait for InquiryService {
    fn get_inquiries(&self) -> Result<Vec<VehicleInquiry>> {
        self.inquiry_repository.load_inquiries()
    }

    /// Derives `max_bid` from the inquiry scalars and persists the record.
    /// A negative max bid is stored as-is; it signals an unprofitable deal.
    async fn create_inquiry(&self, new_inquiry: NewVehicleInquiry) -> Result<VehicleInquiry> {
        let max_bid = valuation::max_bid(
            new_inquiry.expected_resale_value,
            new_inquiry.expected_expenses,
            new_inquiry.distance_to_auction,
            new_inquiry.desired_profit,
        );
        debug!(
            "Creating inquiry for {} {} with max bid {:.2}",
            new_inquiry.make, new_inquiry.model, max_bid
        );
        self.inquiry_repository
            .insert_inquiry(new_inquiry, max_bid)
            .await
    }

    async fn delete_inquiry(&self, inquiry_id: i32) -> Result<usize> {
        self.inquiry_repository.delete_inquiry(inquiry_id).await
    }
}
