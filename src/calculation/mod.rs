//! Calculation logic for the Trennungsgeld engine.
//!
//! This module contains the meal and overnight allowance engine, the travel
//! cost engine with its vehicle rate lookup and cost-or-distance rule, and
//! the aggregator that combines both into one [`CalculationResult`].
//!
//! [`CalculationResult`]: crate::models::CalculationResult

mod aggregator;
mod amounts;
mod meal_allowance;
mod travel_costs;

pub use aggregator::{Calculator, calculate};
pub use amounts::AMOUNT_OUT_OF_RANGE;
pub use meal_allowance::{TOTAL_MEAL_ALLOWANCE, calculate_meal_allowance};
pub use travel_costs::{TOTAL_TRAVEL_COSTS, calculate_travel_costs, rate_for_vehicle};
