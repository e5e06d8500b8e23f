//! Input record for the meal and overnight allowance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for the meal allowance component of the calculation.
///
/// Counts are signed so that negative caller input reaches the engine and is
/// reported as a validation error.
///
/// # Example
///
/// ```
/// use trennungsgeld::models::AllowanceInput;
/// use rust_decimal::Decimal;
///
/// let input = AllowanceInput::new(5, 2, 3)
///     .with_overnight_receipts(4, Decimal::new(320, 0))
///     .with_overnight_flat(2);
/// assert_eq!(input.overnight_stays_without_receipts, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceInput {
    /// Number of full 24-hour days of absence.
    pub full_days: i32,
    /// Number of arrival or departure days.
    pub arrival_departure_days: i32,
    /// Number of further days with more than 8 hours of absence.
    pub partial_days: i32,
    /// Number of nights with a receipt.
    pub overnight_stays_with_receipts: i32,
    /// Sum of all receipted overnight costs.
    pub overnight_costs_total: Decimal,
    /// Number of nights without a receipt.
    pub overnight_stays_without_receipts: i32,
}

impl AllowanceInput {
    /// Creates an input with the three day counts and no overnight stays.
    pub fn new(full_days: i32, arrival_departure_days: i32, partial_days: i32) -> Self {
        Self {
            full_days,
            arrival_departure_days,
            partial_days,
            ..Self::default()
        }
    }

    /// Sets the receipted overnight stays and their total cost.
    pub fn with_overnight_receipts(mut self, stays: i32, costs_total: Decimal) -> Self {
        self.overnight_stays_with_receipts = stays;
        self.overnight_costs_total = costs_total;
        self
    }

    /// Sets the number of overnight stays without receipt.
    pub fn with_overnight_flat(mut self, stays: i32) -> Self {
        self.overnight_stays_without_receipts = stays;
        self
    }
}
