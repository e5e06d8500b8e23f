//! Combination of the meal allowance and travel cost engines.
//!
//! The aggregator runs both engines, hoists their subtotals into the named
//! result fields and merges the remaining line items under `meal_` and
//! `travel_` prefixes.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{AllowanceRates, TravelRates};
use crate::error::EngineResult;
use crate::models::{
    AllowanceInput, CalculationResult, LineItems, MEAL_PREFIX, TRAVEL_PREFIX, TravelCostInput,
};

use super::amounts::checked_sum;
use super::meal_allowance::{TOTAL_MEAL_ALLOWANCE, calculate_meal_allowance};
use super::travel_costs::{TOTAL_TRAVEL_COSTS, calculate_travel_costs};

/// Runs both engines and combines their output.
///
/// Any validation failure of either engine is returned unchanged; no partial
/// result is produced.
pub fn calculate(
    allowance_input: &AllowanceInput,
    travel_input: &TravelCostInput,
    allowance_rates: &AllowanceRates,
    travel_rates: &TravelRates,
) -> EngineResult<CalculationResult> {
    let mut meal_items = calculate_meal_allowance(allowance_input, allowance_rates)?;
    let mut travel_items = calculate_travel_costs(travel_input, travel_rates)?;

    let meal_allowance = split_subtotal(&mut meal_items, TOTAL_MEAL_ALLOWANCE)?;
    let travel_costs = split_subtotal(&mut travel_items, TOTAL_TRAVEL_COSTS)?;

    let mut breakdown = BTreeMap::new();
    extend_prefixed(&mut breakdown, MEAL_PREFIX, meal_items);
    extend_prefixed(&mut breakdown, TRAVEL_PREFIX, travel_items);

    let total_allowance = checked_sum("total_allowance", [&meal_allowance, &travel_costs])?;
    debug!(
        meal_allowance = %meal_allowance,
        travel_costs = %travel_costs,
        total_allowance = %total_allowance,
        "Combined allowance calculated"
    );

    Ok(CalculationResult {
        total_allowance,
        meal_allowance,
        travel_costs,
        breakdown,
    })
}

/// Drops the engine's subtotal entry and returns the sum of what remains.
fn split_subtotal(items: &mut LineItems, key: &str) -> EngineResult<Decimal> {
    items.remove(key);
    checked_sum(key, items.values())
}

fn extend_prefixed(target: &mut BTreeMap<String, Decimal>, prefix: &str, items: LineItems) {
    target.extend(
        items
            .into_iter()
            .map(|(key, value)| (format!("{}{}", prefix, key), value)),
    );
}

/// Central service estimating the separation allowance with one set of rates.
///
/// A `Calculator` never mutates its rates, so a single instance can be shared
/// across threads and called concurrently.
///
/// # Example
///
/// ```
/// use trennungsgeld::calculation::Calculator;
/// use trennungsgeld::models::{AllowanceInput, TravelCostInput};
/// use rust_decimal::Decimal;
///
/// let calculator = Calculator::default();
/// let travel = TravelCostInput {
///     initial_trip_distance_km: Decimal::new(100, 0),
///     ..TravelCostInput::default()
/// };
/// let result = calculator.calculate(&AllowanceInput::new(2, 1, 0), &travel).unwrap();
/// assert_eq!(result.total_allowance, Decimal::new(90, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    allowance_rates: AllowanceRates,
    travel_rates: TravelRates,
}

impl Calculator {
    /// Creates a calculator with explicit rate tables.
    pub fn new(allowance_rates: AllowanceRates, travel_rates: TravelRates) -> Self {
        Self {
            allowance_rates,
            travel_rates,
        }
    }

    /// Returns the meal and overnight allowance rates.
    pub fn allowance_rates(&self) -> &AllowanceRates {
        &self.allowance_rates
    }

    /// Returns the kilometre rates.
    pub fn travel_rates(&self) -> &TravelRates {
        &self.travel_rates
    }

    /// Calculates the meal and overnight allowance only.
    pub fn calculate_meal_allowance(&self, input: &AllowanceInput) -> EngineResult<LineItems> {
        calculate_meal_allowance(input, &self.allowance_rates)
    }

    /// Calculates the travel costs only.
    pub fn calculate_travel_costs(&self, input: &TravelCostInput) -> EngineResult<LineItems> {
        calculate_travel_costs(input, &self.travel_rates)
    }

    /// Calculates the combined allowance.
    pub fn calculate(
        &self,
        allowance_input: &AllowanceInput,
        travel_input: &TravelCostInput,
    ) -> EngineResult<CalculationResult> {
        calculate(
            allowance_input,
            travel_input,
            &self.allowance_rates,
            &self.travel_rates,
        )
    }
}
