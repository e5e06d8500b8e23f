//! Travel cost reimbursement calculation.
//!
//! Trips are reimbursed either at their actual cost or, when no actual cost
//! is given, at the kilometre rate of the selected vehicle. The vehicle is
//! resolved once per call, before any distance is looked at.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::TravelRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{LineItems, TravelCostInput, Vehicle};

use super::amounts::{checked_product, checked_sum};

/// Key of the travel subtotal in the engine output.
pub const TOTAL_TRAVEL_COSTS: &str = "total_travel_costs";

/// Resolves a vehicle selector against the configured kilometre rates.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedVehicle`] for anything other than
/// `car`, `motorcycle`, `bike` or `bicycle`.
pub fn rate_for_vehicle(vehicle: &str, rates: &TravelRates) -> EngineResult<Decimal> {
    let vehicle: Vehicle = vehicle.parse()?;
    Ok(rates.rate_for(vehicle))
}

/// Amount of one trip: the actual cost when given, otherwise distance × rate.
///
/// The distance is neither used nor validated when an actual cost is present.
fn cost_or_distance(
    trip: &str,
    distance_km: Decimal,
    actual_cost: Option<Decimal>,
    rate: Decimal,
) -> EngineResult<Decimal> {
    match actual_cost {
        Some(cost) if cost < Decimal::ZERO => Err(EngineError::invalid_input(
            format!("{}_actual_cost", trip),
            "actual costs must not be negative",
        )),
        Some(cost) => Ok(cost),
        None if distance_km < Decimal::ZERO => Err(EngineError::invalid_input(
            format!("{}_distance_km", trip),
            "distances must not be negative",
        )),
        None => checked_product(trip, distance_km, rate),
    }
}

/// Calculates reimbursable travel costs.
///
/// Returns the line items `initial_trip`, `return_trip`, `home_trips`,
/// `commuting`, `additional_costs` and [`TOTAL_TRAVEL_COSTS`], which is the
/// sum of the other five.
///
/// # Errors
///
/// Checked in this order, the first failure wins:
///
/// 1. unsupported vehicle selector
/// 2. negative actual cost or distance of the initial and return trip
/// 3. negative `weekly_home_trips` ("home trips must be non-negative"), then
///    a negative home trip cost or distance
/// 4. commuting: with a per-day cost, a negative cost and then negative
///    `commuting_days`; without, a negative distance or negative days
///    (both reported as "commuting distance and commuting days must be
///    non-negative")
/// 5. negative `additional_costs`
///
/// A trip, product or total that does not fit a `Decimal` fails with
/// "amount out of range" where it is computed.
///
/// # Examples
///
/// ```
/// use trennungsgeld::calculation::{calculate_travel_costs, TOTAL_TRAVEL_COSTS};
/// use trennungsgeld::config::TravelRates;
/// use trennungsgeld::models::TravelCostInput;
/// use rust_decimal::Decimal;
///
/// let input = TravelCostInput {
///     initial_trip_distance_km: Decimal::new(1000, 0),
///     initial_trip_actual_cost: Some(Decimal::new(50, 0)),
///     ..TravelCostInput::default()
/// };
/// let items = calculate_travel_costs(&input, &TravelRates::default()).unwrap();
/// assert_eq!(items["initial_trip"], Decimal::new(50, 0));
/// ```
pub fn calculate_travel_costs(
    input: &TravelCostInput,
    rates: &TravelRates,
) -> EngineResult<LineItems> {
    let rate = rate_for_vehicle(&input.vehicle, rates)?;

    let initial_trip = cost_or_distance(
        "initial_trip",
        input.initial_trip_distance_km,
        input.initial_trip_actual_cost,
        rate,
    )?;
    let return_trip = cost_or_distance(
        "return_trip",
        input.return_trip_distance_km,
        input.return_trip_actual_cost,
        rate,
    )?;

    if input.weekly_home_trips < 0 {
        return Err(EngineError::invalid_input(
            "weekly_home_trips",
            "home trips must be non-negative",
        ));
    }
    let per_home_trip = cost_or_distance(
        "home_trip",
        input.home_trip_distance_km,
        input.home_trip_actual_cost,
        rate,
    )?;
    let home_trips = checked_product(
        "home_trips",
        per_home_trip,
        Decimal::from(input.weekly_home_trips),
    )?;

    let commuting = calculate_commuting(input, rate)?;

    if input.additional_costs < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "additional_costs",
            "additional costs must be non-negative",
        ));
    }

    let mut items = LineItems::new();
    items.insert("initial_trip".to_string(), initial_trip);
    items.insert("return_trip".to_string(), return_trip);
    items.insert("home_trips".to_string(), home_trips);
    items.insert("commuting".to_string(), commuting);
    items.insert("additional_costs".to_string(), input.additional_costs);

    let total = checked_sum(TOTAL_TRAVEL_COSTS, items.values())?;
    debug!(
        vehicle = %input.vehicle,
        rate = %rate,
        total = %total,
        "Calculated travel costs"
    );
    items.insert(TOTAL_TRAVEL_COSTS.to_string(), total);

    Ok(items)
}

fn calculate_commuting(input: &TravelCostInput, rate: Decimal) -> EngineResult<Decimal> {
    let days = Decimal::from(input.commuting_days);

    match input.commuting_actual_cost_per_day {
        Some(cost) => {
            if cost < Decimal::ZERO {
                return Err(EngineError::invalid_input(
                    "commuting_actual_cost_per_day",
                    "commuting cost per day must be non-negative",
                ));
            }
            if input.commuting_days < 0 {
                return Err(EngineError::invalid_input(
                    "commuting_days",
                    "commuting days must be non-negative",
                ));
            }
            checked_product("commuting", cost, days)
        }
        None => {
            if input.commuting_distance_km < Decimal::ZERO || input.commuting_days < 0 {
                return Err(EngineError::invalid_input(
                    "commuting_days",
                    "commuting distance and commuting days must be non-negative",
                ));
            }
            let distance = checked_product("commuting", input.commuting_distance_km, days)?;
            checked_product("commuting", distance, rate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> TravelRates {
        TravelRates::default()
    }

    fn assert_invalid(result: EngineResult<LineItems>, expected: &str) {
        match result {
            Err(EngineError::InvalidInput { message, .. }) => {
                assert!(
                    message.contains(expected),
                    "Expected message containing '{}', got '{}'",
                    expected,
                    message
                );
            }
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    /// TC-001: distances, an override, home trips, commuting and extras
    #[test]
    fn test_travel_costs_with_mixed_inputs() {
        let input = TravelCostInput {
            initial_trip_distance_km: dec("500"),
            return_trip_actual_cost: Some(dec("120.0")),
            weekly_home_trips: 4,
            home_trip_distance_km: dec("400"),
            commuting_days: 10,
            commuting_distance_km: dec("15"),
            additional_costs: dec("50.0"),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["initial_trip"], dec("100"));
        assert_eq!(items["return_trip"], dec("120"));
        assert_eq!(items["home_trips"], dec("320"));
        assert_eq!(items["commuting"], dec("30"));
        assert_eq!(items["additional_costs"], dec("50"));
        assert_eq!(items[TOTAL_TRAVEL_COSTS], dec("620"));
    }

    #[test]
    fn test_vehicle_rate_selection() {
        let cases = [
            ("car", "0.20"),
            ("motorcycle", "0.13"),
            ("bike", "0.05"),
            ("bicycle", "0.05"),
        ];
        for (vehicle, expected) in cases {
            assert_eq!(rate_for_vehicle(vehicle, &rates()).unwrap(), dec(expected));
        }
    }

    #[test]
    fn test_unsupported_vehicle_rejected_even_with_zero_inputs() {
        let input = TravelCostInput {
            vehicle: "scooter".to_string(),
            ..TravelCostInput::default()
        };

        match calculate_travel_costs(&input, &rates()) {
            Err(EngineError::UnsupportedVehicle { vehicle, choices }) => {
                assert_eq!(vehicle, "scooter");
                assert!(choices.contains("motorcycle"));
            }
            other => panic!("Expected UnsupportedVehicle, got {:?}", other),
        }
    }

    #[test]
    fn test_vehicle_checked_before_distances() {
        let input = TravelCostInput {
            initial_trip_distance_km: dec("-10"),
            vehicle: "boat".to_string(),
            ..TravelCostInput::default()
        };

        assert!(matches!(
            calculate_travel_costs(&input, &rates()),
            Err(EngineError::UnsupportedVehicle { .. })
        ));
    }

    #[test]
    fn test_bicycle_rate_applies_to_every_distance() {
        let input = TravelCostInput {
            initial_trip_distance_km: dec("100"),
            return_trip_distance_km: dec("100"),
            weekly_home_trips: 2,
            home_trip_distance_km: dec("10"),
            commuting_days: 4,
            commuting_distance_km: dec("5"),
            vehicle: "bike".to_string(),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["initial_trip"], dec("5"));
        assert_eq!(items["return_trip"], dec("5"));
        assert_eq!(items["home_trips"], dec("1"));
        assert_eq!(items["commuting"], dec("1"));
        assert_eq!(items[TOTAL_TRAVEL_COSTS], dec("12"));
    }

    #[test]
    fn test_actual_cost_overrides_distance() {
        let input = TravelCostInput {
            initial_trip_distance_km: dec("1000"),
            initial_trip_actual_cost: Some(dec("50.0")),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["initial_trip"], dec("50"));
    }

    #[test]
    fn test_override_ignores_negative_distance() {
        let input = TravelCostInput {
            return_trip_distance_km: dec("-500"),
            return_trip_actual_cost: Some(dec("80")),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["return_trip"], dec("80"));
    }

    #[test]
    fn test_zero_override_is_distinct_from_absent() {
        let input = TravelCostInput {
            initial_trip_distance_km: dec("100"),
            initial_trip_actual_cost: Some(Decimal::ZERO),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["initial_trip"], Decimal::ZERO);
    }

    #[test]
    fn test_negative_actual_cost_rejected() {
        let input = TravelCostInput {
            initial_trip_actual_cost: Some(dec("-1")),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "actual costs must not be negative",
        );
    }

    #[test]
    fn test_negative_distance_rejected() {
        let input = TravelCostInput {
            return_trip_distance_km: dec("-1"),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "distances must not be negative",
        );
    }

    #[test]
    fn test_home_trip_cost_multiplied_by_trip_count() {
        let input = TravelCostInput {
            weekly_home_trips: 3,
            home_trip_distance_km: dec("999"),
            home_trip_actual_cost: Some(dec("45.50")),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["home_trips"], dec("136.50"));
    }

    #[test]
    fn test_negative_home_trips_rejected() {
        let input = TravelCostInput {
            weekly_home_trips: -1,
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "home trips must be non-negative",
        );
    }

    #[test]
    fn test_negative_home_trips_rejected_with_override() {
        let input = TravelCostInput {
            weekly_home_trips: -1,
            home_trip_actual_cost: Some(dec("30")),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "home trips must be non-negative",
        );
    }

    #[test]
    fn test_commuting_with_cost_per_day() {
        let input = TravelCostInput {
            commuting_days: 5,
            commuting_distance_km: dec("-3"),
            commuting_actual_cost_per_day: Some(dec("4.20")),
            ..TravelCostInput::default()
        };

        let items = calculate_travel_costs(&input, &rates()).unwrap();

        assert_eq!(items["commuting"], dec("21"));
    }

    #[test]
    fn test_negative_commuting_days_with_cost_override_rejected() {
        let input = TravelCostInput {
            commuting_days: -2,
            commuting_actual_cost_per_day: Some(dec("5.0")),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "commuting days must be non-negative",
        );
    }

    #[test]
    fn test_negative_commuting_days_without_override_rejected() {
        let input = TravelCostInput {
            commuting_days: -2,
            commuting_distance_km: dec("10"),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "commuting days must be non-negative",
        );
    }

    #[test]
    fn test_negative_commuting_distance_rejected() {
        let input = TravelCostInput {
            commuting_days: 2,
            commuting_distance_km: dec("-10"),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "commuting distance",
        );
    }

    #[test]
    fn test_negative_commuting_cost_rejected() {
        let input = TravelCostInput {
            commuting_days: 2,
            commuting_actual_cost_per_day: Some(dec("-5")),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "commuting cost per day must be non-negative",
        );
    }

    #[test]
    fn test_negative_additional_costs_rejected() {
        let input = TravelCostInput {
            additional_costs: dec("-0.5"),
            ..TravelCostInput::default()
        };
        assert_invalid(
            calculate_travel_costs(&input, &rates()),
            "additional costs must be non-negative",
        );
    }

    #[test]
    fn test_default_input_yields_zero_total() {
        let items = calculate_travel_costs(&TravelCostInput::default(), &rates()).unwrap();

        assert_eq!(items.len(), 6);
        assert_eq!(items[TOTAL_TRAVEL_COSTS], Decimal::ZERO);
    }

    fn assert_out_of_range(result: EngineResult<LineItems>, field: &str) {
        assert_eq!(
            result,
            Err(EngineError::invalid_input(field, "amount out of range"))
        );
    }

    #[test]
    fn test_oversized_commuting_distance_is_out_of_range() {
        let input = TravelCostInput {
            commuting_days: 2,
            commuting_distance_km: Decimal::MAX,
            ..TravelCostInput::default()
        };
        assert_out_of_range(calculate_travel_costs(&input, &rates()), "commuting");
    }

    #[test]
    fn test_oversized_commuting_cost_per_day_is_out_of_range() {
        let input = TravelCostInput {
            commuting_days: 3,
            commuting_actual_cost_per_day: Some(Decimal::MAX),
            ..TravelCostInput::default()
        };
        assert_out_of_range(calculate_travel_costs(&input, &rates()), "commuting");
    }

    #[test]
    fn test_oversized_home_trip_product_is_out_of_range() {
        let input = TravelCostInput {
            weekly_home_trips: 2,
            home_trip_actual_cost: Some(Decimal::MAX),
            ..TravelCostInput::default()
        };
        assert_out_of_range(calculate_travel_costs(&input, &rates()), "home_trips");
    }

    #[test]
    fn test_oversized_trip_distance_is_out_of_range() {
        let custom = TravelRates {
            car_per_km: dec("2"),
            ..rates()
        };
        let input = TravelCostInput {
            initial_trip_distance_km: Decimal::MAX,
            ..TravelCostInput::default()
        };
        assert_out_of_range(calculate_travel_costs(&input, &custom), "initial_trip");
    }

    #[test]
    fn test_total_overflow_is_out_of_range() {
        let input = TravelCostInput {
            initial_trip_actual_cost: Some(Decimal::MAX),
            additional_costs: Decimal::ONE,
            ..TravelCostInput::default()
        };
        assert_out_of_range(calculate_travel_costs(&input, &rates()), TOTAL_TRAVEL_COSTS);
    }
}
