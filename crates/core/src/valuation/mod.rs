//! Valuation module - pure financial derivations.

mod calculator;

pub use calculator::{max_bid, profit, profit_potential, total_cost};

#[cfg(test)]
mod calculator_tests;
