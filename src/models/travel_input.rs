//! Input record for reimbursable travel costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs required to estimate reimbursable travel costs.
///
/// Every `*_actual_cost` field is an override: when present it replaces the
/// distance-based amount of the same trip and the distance is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelCostInput {
    /// Distance of the initial trip to the new duty station.
    pub initial_trip_distance_km: Decimal,
    /// Actual cost of the initial trip.
    pub initial_trip_actual_cost: Option<Decimal>,
    /// Distance of the final return trip.
    pub return_trip_distance_km: Decimal,
    /// Actual cost of the return trip.
    pub return_trip_actual_cost: Option<Decimal>,
    /// Number of approved home trips.
    pub weekly_home_trips: i32,
    /// Distance of one home trip.
    pub home_trip_distance_km: Decimal,
    /// Actual cost of one home trip.
    pub home_trip_actual_cost: Option<Decimal>,
    /// Number of commuting days between lodging and duty station.
    pub commuting_days: i32,
    /// Distance of one commuting leg.
    pub commuting_distance_km: Decimal,
    /// Actual commuting cost per day.
    pub commuting_actual_cost_per_day: Option<Decimal>,
    /// Further reimbursable costs (luggage, parking, ...).
    pub additional_costs: Decimal,
    /// Vehicle selector: `car`, `motorcycle`, `bike` or `bicycle`.
    pub vehicle: String,
}

impl Default for TravelCostInput {
    fn default() -> Self {
        Self {
            initial_trip_distance_km: Decimal::ZERO,
            initial_trip_actual_cost: None,
            return_trip_distance_km: Decimal::ZERO,
            return_trip_actual_cost: None,
            weekly_home_trips: 0,
            home_trip_distance_km: Decimal::ZERO,
            home_trip_actual_cost: None,
            commuting_days: 0,
            commuting_distance_km: Decimal::ZERO,
            commuting_actual_cost_per_day: None,
            additional_costs: Decimal::ZERO,
            vehicle: "car".to_string(),
        }
    }
}
