//! Meal (Verpflegung) and overnight allowance calculation.
//!
//! Each day category is multiplied by its flat daily rate. Receipted
//! overnight costs are reimbursed as-is, nights without receipt get the flat
//! overnight rate.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::AllowanceRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{AllowanceInput, LineItems};

use super::amounts::{checked_product, checked_sum};

/// Key of the meal subtotal in the engine output.
pub const TOTAL_MEAL_ALLOWANCE: &str = "total_meal_allowance";

/// Calculates the meal and overnight allowance.
///
/// Returns the line items `full_days`, `arrival_departure_days`,
/// `partial_days`, `overnight_with_receipts`, `overnight_without_receipts`
/// and [`TOTAL_MEAL_ALLOWANCE`], which is the sum of the other five.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for the first negative field, checked
/// in this order: the three day counts, the receipted stays and their cost,
/// the stays without receipt. An amount that does not fit a `Decimal` is
/// reported as "amount out of range" for the line item it belongs to.
///
/// # Examples
///
/// ```
/// use trennungsgeld::calculation::{calculate_meal_allowance, TOTAL_MEAL_ALLOWANCE};
/// use trennungsgeld::config::AllowanceRates;
/// use trennungsgeld::models::AllowanceInput;
/// use rust_decimal::Decimal;
///
/// let items = calculate_meal_allowance(&AllowanceInput::new(2, 1, 0), &AllowanceRates::default())
///     .unwrap();
/// assert_eq!(items[TOTAL_MEAL_ALLOWANCE], Decimal::new(70, 0));
/// ```
pub fn calculate_meal_allowance(
    input: &AllowanceInput,
    rates: &AllowanceRates,
) -> EngineResult<LineItems> {
    if input.full_days < 0 || input.arrival_departure_days < 0 || input.partial_days < 0 {
        return Err(EngineError::invalid_input(
            "day_counts",
            "day counts must be non-negative",
        ));
    }
    if input.overnight_stays_with_receipts < 0 || input.overnight_costs_total < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "overnight_with_receipts",
            "overnight stays and costs must be non-negative",
        ));
    }
    if input.overnight_stays_without_receipts < 0 {
        return Err(EngineError::invalid_input(
            "overnight_stays_without_receipts",
            "number of overnight stays without receipts must be non-negative",
        ));
    }

    let mut items = LineItems::new();
    items.insert(
        "full_days".to_string(),
        checked_product("full_days", Decimal::from(input.full_days), rates.full_day)?,
    );
    items.insert(
        "arrival_departure_days".to_string(),
        checked_product(
            "arrival_departure_days",
            Decimal::from(input.arrival_departure_days),
            rates.arrival_departure,
        )?,
    );
    items.insert(
        "partial_days".to_string(),
        checked_product("partial_days", Decimal::from(input.partial_days), rates.partial_day)?,
    );
    items.insert(
        "overnight_with_receipts".to_string(),
        input.overnight_costs_total,
    );
    items.insert(
        "overnight_without_receipts".to_string(),
        checked_product(
            "overnight_without_receipts",
            Decimal::from(input.overnight_stays_without_receipts),
            rates.overnight_flat,
        )?,
    );

    let total = checked_sum(TOTAL_MEAL_ALLOWANCE, items.values())?;
    debug!(
        full_days = input.full_days,
        arrival_departure_days = input.arrival_departure_days,
        partial_days = input.partial_days,
        total = %total,
        "Calculated meal allowance"
    );
    items.insert(TOTAL_MEAL_ALLOWANCE.to_string(), total);

    Ok(items)
}
