//! Parts module - the global parts catalog.
//!
//! Distinct from the per-inquiry ledger: catalog parts are not attributed to
//! any vehicle or inquiry.

mod parts_model;
mod parts_service;
mod parts_traits;

pub use parts_model::{NewPart, Part};
pub use parts_service::PartService;
pub use parts_traits::{PartRepositoryTrait, PartServiceTrait};
