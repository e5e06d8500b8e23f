//! Request types for the Trennungsgeld API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. The same document shape is accepted by the CLI `--input` file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceInput, TravelCostInput};

/// Request body for the `/calculate` endpoint.
///
/// Both input objects are optional; missing fields take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Selects the rate schedule; the newest schedule is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Meal and overnight allowance input.
    #[serde(default)]
    pub meal_allowance: AllowanceInput,
    /// Travel cost input.
    #[serde(default)]
    pub travel_costs: TravelCostInput,
}
