//! Range filtering over vehicle inquiries.
//!
//! Pure functions with no storage dependency: the caller loads the records,
//! the filter narrows them, the caller displays the result.

use serde::{Deserialize, Serialize};

use super::inquiries_model::VehicleInquiry;

/// An inclusive `[min, max]` bound.
///
/// A range where `min > max` is applied literally and admits no values; no
/// swapping or validation is performed. That is intentional, documented
/// behavior inherited from the product, not an oversight to fix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosedRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> ClosedRange<T> {
    pub fn new(min: T, max: T) -> Self {
        ClosedRange { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Filter criteria for reviewing inquiries. A record passes only if all
/// three bounds hold simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryFilter {
    pub year: ClosedRange<i32>,
    pub miles: ClosedRange<i32>,
    pub profit_potential: ClosedRange<f64>,
}

impl InquiryFilter {
    fn matches(&self, inquiry: &VehicleInquiry) -> bool {
        self.year.contains(inquiry.year)
            && self.miles.contains(inquiry.miles)
            && self.profit_potential.contains(inquiry.profit_potential())
    }
}

/// Returns the subsequence of `records` passing `filter`, preserving the
/// original order. Empty input yields empty output. Idempotent: filtering an
/// already-filtered result with the same bounds returns the identical set.
pub fn filter_inquiries(records: Vec<VehicleInquiry>, filter: &InquiryFilter) -> Vec<VehicleInquiry> {
    records.into_iter().filter(|r| filter.matches(r)).collect()
}
