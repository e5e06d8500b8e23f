//! Command-line arguments and input document handling.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{AllowanceInput, TravelCostInput};

use super::CliError;

/// Trennungsgeld calculator
///
/// Estimates the federal separation allowance including travel costs.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "trennungsgeld")]
pub struct TrennungsgeldCli {
    /// Directory with statute.yaml and rates/*.yaml (built-in 2024 rates if omitted)
    #[arg(long, global = true, env = "TRENNUNGSGELD_RATES")]
    pub rates: Option<PathBuf>,

    /// Date selecting the rate schedule, YYYY-MM-DD (newest schedule if omitted)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

/// Trennungsgeld commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Calculate from flags and an optional JSON input document
    #[command(allow_negative_numbers = true)]
    Calculate(CalculateArgs),

    /// Interactive quickstart asking for every value
    Prompt,

    /// Start the HTTP API
    Serve(ServeArgs),
}

/// Arguments of the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000", env = "TRENNUNGSGELD_LISTEN")]
    pub listen: SocketAddr,
}

/// Arguments of the `calculate` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CalculateArgs {
    /// JSON file with optional `meal_allowance` and `travel_costs` objects overriding the flags
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Number of full days of absence
    #[arg(long, default_value_t = 0, help_heading = "Verpflegung und Übernachtung")]
    pub full_days: i32,

    /// Number of arrival or departure days
    #[arg(long, default_value_t = 0, help_heading = "Verpflegung und Übernachtung")]
    pub arrival_days: i32,

    /// Number of further days with more than 8 hours of absence
    #[arg(long, default_value_t = 0, help_heading = "Verpflegung und Übernachtung")]
    pub partial_days: i32,

    /// Overnight stays with receipts
    #[arg(long, default_value_t = 0, help_heading = "Verpflegung und Übernachtung")]
    pub overnight_receipts: i32,

    /// Sum of receipted overnight costs
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Verpflegung und Übernachtung")]
    pub overnight_costs: Decimal,

    /// Overnight stays without receipts (flat rate)
    #[arg(long, default_value_t = 0, help_heading = "Verpflegung und Übernachtung")]
    pub overnight_flat: i32,

    /// Vehicle for kilometre rates: car, motorcycle or bike
    #[arg(long, default_value = "car", help_heading = "Reisekosten")]
    pub vehicle: String,

    /// Kilometres of the initial trip to the new duty station
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Reisekosten")]
    pub initial_trip_km: Decimal,

    /// Actual cost of the initial trip (overrides the kilometres)
    #[arg(long, help_heading = "Reisekosten")]
    pub initial_trip_cost: Option<Decimal>,

    /// Kilometres of the final return trip
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Reisekosten")]
    pub return_trip_km: Decimal,

    /// Actual cost of the return trip
    #[arg(long, help_heading = "Reisekosten")]
    pub return_trip_cost: Option<Decimal>,

    /// Number of approved home trips
    #[arg(long, default_value_t = 0, help_heading = "Reisekosten")]
    pub home_trips: i32,

    /// Distance of one home trip
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Reisekosten")]
    pub home_trip_km: Decimal,

    /// Actual cost of one home trip
    #[arg(long, help_heading = "Reisekosten")]
    pub home_trip_cost: Option<Decimal>,

    /// Number of commuting days between lodging and duty station
    #[arg(long, default_value_t = 0, help_heading = "Reisekosten")]
    pub commuting_days: i32,

    /// Distance of one commuting leg
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Reisekosten")]
    pub commuting_distance: Decimal,

    /// Actual commuting cost per day
    #[arg(long, help_heading = "Reisekosten")]
    pub commuting_cost: Option<Decimal>,

    /// Further reimbursable costs (luggage, parking, ...)
    #[arg(long, default_value_t = Decimal::ZERO, help_heading = "Reisekosten")]
    pub additional_costs: Decimal,
}

impl CalculateArgs {
    /// Builds both input records from the flags, then applies the input
    /// document if one was given.
    pub fn build_inputs(&self) -> Result<(AllowanceInput, TravelCostInput), CliError> {
        let allowance = AllowanceInput {
            full_days: self.full_days,
            arrival_departure_days: self.arrival_days,
            partial_days: self.partial_days,
            overnight_stays_with_receipts: self.overnight_receipts,
            overnight_costs_total: self.overnight_costs,
            overnight_stays_without_receipts: self.overnight_flat,
        };

        let travel = TravelCostInput {
            initial_trip_distance_km: self.initial_trip_km,
            initial_trip_actual_cost: self.initial_trip_cost,
            return_trip_distance_km: self.return_trip_km,
            return_trip_actual_cost: self.return_trip_cost,
            weekly_home_trips: self.home_trips,
            home_trip_distance_km: self.home_trip_km,
            home_trip_actual_cost: self.home_trip_cost,
            commuting_days: self.commuting_days,
            commuting_distance_km: self.commuting_distance,
            commuting_actual_cost_per_day: self.commuting_cost,
            additional_costs: self.additional_costs,
            vehicle: self.vehicle.clone(),
        };

        match &self.input {
            Some(path) => {
                let document = load_document(path)?;
                apply_document(allowance, travel, &document, path)
            }
            None => Ok((allowance, travel)),
        }
    }
}

fn load_document(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| input_error(path, e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| input_error(path, e.to_string()))
}

/// Overrides individual input fields with the keys of the document's
/// `meal_allowance` and `travel_costs` objects.
pub fn apply_document(
    allowance: AllowanceInput,
    travel: TravelCostInput,
    document: &Value,
    path: &Path,
) -> Result<(AllowanceInput, TravelCostInput), CliError> {
    let root = document
        .as_object()
        .ok_or_else(|| input_error(path, "the document must contain a JSON object"))?;

    let allowance = merge_section(allowance, root.get("meal_allowance"), "meal_allowance", path)?;
    let travel = merge_section(travel, root.get("travel_costs"), "travel_costs", path)?;
    Ok((allowance, travel))
}

fn merge_section<T: Serialize + DeserializeOwned>(
    base: T,
    section: Option<&Value>,
    name: &str,
    path: &Path,
) -> Result<T, CliError> {
    let Some(section) = section else {
        return Ok(base);
    };
    let overrides = section
        .as_object()
        .ok_or_else(|| input_error(path, format!("'{}' must be a JSON object", name)))?;

    let mut merged = serde_json::to_value(base).map_err(|e| input_error(path, e.to_string()))?;
    if let Some(fields) = merged.as_object_mut() {
        fields.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    serde_json::from_value(merged).map_err(|e| input_error(path, format!("{}: {}", name, e)))
}

fn input_error(path: &Path, message: impl Into<String>) -> CliError {
    CliError::InputFile {
        path: path.display().to_string(),
        message: message.into(),
    }
}
