//! Core data models for the Trennungsgeld engine.
//!
//! This module contains the input records, the vehicle selector and the
//! result types shared by every front end.

mod allowance_input;
mod calculation_result;
mod travel_input;
mod vehicle;

pub use allowance_input::AllowanceInput;
pub use calculation_result::{CalculationResult, LineItems, MEAL_PREFIX, TRAVEL_PREFIX};
pub use travel_input::TravelCostInput;
pub use vehicle::{VEHICLE_CHOICES, Vehicle};
