//! Human-readable breakdown of a calculation result.
//!
//! Every front end prints the same report, so the layout lives here.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CalculationResult;

/// Title line of every report.
pub const REPORT_TITLE: &str = "Berechnungsübersicht:";

/// Number of summary lines preceding the detail entries.
pub const HEADER_LINES: usize = 5;

/// Renders an amount with exactly two decimals and the currency suffix.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2} EUR", rounded)
}

/// Generates the report lines for a calculation result.
///
/// Five header lines (title, grand total, meal subtotal, travel subtotal,
/// details label) are followed by one line per breakdown entry in ascending
/// key order.
///
/// # Example
///
/// ```
/// use trennungsgeld::calculation::Calculator;
/// use trennungsgeld::models::{AllowanceInput, TravelCostInput};
/// use trennungsgeld::report::format_breakdown;
///
/// let result = Calculator::default()
///     .calculate(&AllowanceInput::new(1, 0, 0), &TravelCostInput::default())
///     .unwrap();
/// let lines = format_breakdown(&result);
/// assert_eq!(lines[0], "Berechnungsübersicht:");
/// assert_eq!(lines[1], "  Gesamtsumme: 28.00 EUR");
/// ```
pub fn format_breakdown(result: &CalculationResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(HEADER_LINES + result.breakdown.len());
    lines.push(REPORT_TITLE.to_string());
    lines.push(format!("  Gesamtsumme: {}", format_amount(result.total_allowance)));
    lines.push(format!(
        "  Verpflegung und Übernachtung: {}",
        format_amount(result.meal_allowance)
    ));
    lines.push(format!("  Reisekosten: {}", format_amount(result.travel_costs)));
    lines.push("  Detailposten:".to_string());

    for (key, value) in &result.breakdown {
        lines.push(format!("    {}: {}", key, format_amount(*value)));
    }

    lines
}
