//! Vehicle inquiries module - domain models, services, traits, and filtering.

mod inquiries_filter;
mod inquiries_model;
mod inquiries_service;
mod inquiries_traits;

pub use inquiries_filter::{filter_inquiries, ClosedRange, InquiryFilter};
pub use inquiries_model::{DamageCategory, NewVehicleInquiry, VehicleInquiry};
pub use inquiries_service::InquiryService;
pub use inquiries_traits::{InquiryRepositoryTrait, InquiryServiceTrait};

#[cfg(test)]
mod inquiries_filter_tests;
#[cfg(test)]
mod inquiries_model_tests;
