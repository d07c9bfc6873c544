//! SQLite storage implementation for vehicle inquiries.

mod model;
mod repository;

pub use model::{NewVehicleInquiryDB, VehicleInquiryDB};
pub use repository::InquiryRepository;
