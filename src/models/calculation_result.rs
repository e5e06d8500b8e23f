//! Calculation result models for the Trennungsgeld engine.
//!
//! This module contains the [`CalculationResult`] type produced by the
//! aggregator and the [`LineItems`] mapping produced by each engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Line items of one engine, keyed by item name.
///
/// A `BTreeMap` keeps iteration ascending by key regardless of the order in
/// which items were inserted.
pub type LineItems = BTreeMap<String, Decimal>;

/// Prefix of meal allowance keys in [`CalculationResult::breakdown`].
pub const MEAL_PREFIX: &str = "meal_";

/// Prefix of travel cost keys in [`CalculationResult::breakdown`].
pub const TRAVEL_PREFIX: &str = "travel_";

/// The combined result of a Trennungsgeld estimate.
///
/// # Example
///
/// ```
/// use trennungsgeld::models::CalculationResult;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let result = CalculationResult {
///     total_allowance: Decimal::new(90, 0),
///     meal_allowance: Decimal::new(70, 0),
///     travel_costs: Decimal::new(20, 0),
///     breakdown: BTreeMap::new(),
/// };
/// assert_eq!(result.total_allowance, result.meal_allowance + result.travel_costs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Meal subtotal plus travel subtotal.
    pub total_allowance: Decimal,
    /// Subtotal of the meal and overnight allowance.
    pub meal_allowance: Decimal,
    /// Subtotal of the travel cost reimbursement.
    pub travel_costs: Decimal,
    /// Every line item except the two subtotals, keys prefixed with
    /// `meal_` or `travel_`.
    pub breakdown: BTreeMap<String, Decimal>,
}
