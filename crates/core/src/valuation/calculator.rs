//! Pure, side-effect-free financial derivations.
//!
//! These functions are the single source of truth for every derived field in
//! the data model. Services call them at write time and store the result;
//! nothing downstream recomputes or mutates a derived value independently.

use crate::constants::TRANSPORT_COST_PER_MILE;

/// Upper bound on an auction bid that still preserves the desired profit
/// margin after expected expenses and transport cost.
///
/// The result is intentionally NOT clamped at zero: a negative max bid
/// signals an unprofitable deal and must be surfaced as-is.
pub fn max_bid(
    expected_resale_value: f64,
    expected_expenses: f64,
    distance_to_auction: f64,
    desired_profit: f64,
) -> f64 {
    expected_resale_value
        - expected_expenses
        - distance_to_auction * TRANSPORT_COST_PER_MILE
        - desired_profit
}

/// Total accumulated cost of an owned vehicle.
pub fn total_cost(purchase_cost: f64, repair_cost: f64, part_cost: f64, misc_cost: f64) -> f64 {
    purchase_cost + repair_cost + part_cost + misc_cost
}

/// Realized profit on an owned, already-processed vehicle.
pub fn profit(resale_value: f64, total_cost: f64) -> f64 {
    resale_value - total_cost
}

/// Expected resale value minus expected expenses. Used only to filter and
/// rank inquiries; distinct from [`profit`], which applies to owned vehicles.
pub fn profit_potential(expected_resale_value: f64, expected_expenses: f64) -> f64 {
    expected_resale_value - expected_expenses
}
