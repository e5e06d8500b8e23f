//! Configuration types for the BRKG rate tables.
//!
//! This module contains the strongly-typed configuration structures. The
//! rate tables carry `Default` impls with the 2024 federal figures and can
//! also be deserialized from YAML schedule files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Vehicle;

/// Meal and overnight allowance rates in Euro according to the BRKG.
///
/// The defaults reflect the 2024 federal rates:
///
/// * 28 EUR for full 24-hour absences
/// * 14 EUR for arrival or departure days
/// * 14 EUR for partial days with more than 8 hours of absence
/// * 20 EUR flat overnight allowance when no receipts are provided
///
/// # Example
///
/// ```
/// use trennungsgeld::config::AllowanceRates;
/// use rust_decimal::Decimal;
///
/// let rates = AllowanceRates::default();
/// assert_eq!(rates.full_day, Decimal::new(2800, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceRates {
    /// Rate per full day of absence.
    pub full_day: Decimal,
    /// Rate per arrival or departure day.
    pub arrival_departure: Decimal,
    /// Rate per partial day with more than 8 hours of absence.
    pub partial_day: Decimal,
    /// Flat rate per night without receipt.
    pub overnight_flat: Decimal,
}

impl Default for AllowanceRates {
    fn default() -> Self {
        Self {
            full_day: Decimal::new(2800, 2),
            arrival_departure: Decimal::new(1400, 2),
            partial_day: Decimal::new(1400, 2),
            overnight_flat: Decimal::new(2000, 2),
        }
    }
}

impl AllowanceRates {
    /// Checks that every rate is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        check_rate("full_day", self.full_day)?;
        check_rate("arrival_departure", self.arrival_departure)?;
        check_rate("partial_day", self.partial_day)?;
        check_rate("overnight_flat", self.overnight_flat)
    }
}

/// Mileage reimbursement rates in Euro per kilometre.
///
/// The standard BRKG kilometre allowance for cars is 0.20 EUR. Lower rates
/// apply to motorcycles (0.13 EUR) and bicycles (0.05 EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelRates {
    /// Rate per kilometre by car.
    pub car_per_km: Decimal,
    /// Rate per kilometre by motorcycle.
    pub motorcycle_per_km: Decimal,
    /// Rate per kilometre by bicycle.
    pub bicycle_per_km: Decimal,
}

impl Default for TravelRates {
    fn default() -> Self {
        Self {
            car_per_km: Decimal::new(20, 2),
            motorcycle_per_km: Decimal::new(13, 2),
            bicycle_per_km: Decimal::new(5, 2),
        }
    }
}

impl TravelRates {
    /// Returns the per-kilometre rate for a vehicle.
    ///
    /// ```
    /// use trennungsgeld::config::TravelRates;
    /// use trennungsgeld::models::Vehicle;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = TravelRates::default();
    /// assert_eq!(rates.rate_for(Vehicle::Motorcycle), Decimal::new(13, 2));
    /// ```
    pub fn rate_for(&self, vehicle: Vehicle) -> Decimal {
        match vehicle {
            Vehicle::Car => self.car_per_km,
            Vehicle::Motorcycle => self.motorcycle_per_km,
            Vehicle::Bicycle => self.bicycle_per_km,
        }
    }

    /// Checks that every rate is non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        check_rate("car_per_km", self.car_per_km)?;
        check_rate("motorcycle_per_km", self.motorcycle_per_km)?;
        check_rate("bicycle_per_km", self.bicycle_per_km)
    }
}

fn check_rate(name: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::invalid_input(name, "rates must be non-negative"));
    }
    Ok(())
}

/// Metadata about the statute the rates are taken from.
#[derive(Debug, Clone, Deserialize)]
pub struct StatuteMetadata {
    /// Short code of the statute (e.g., "BRKG").
    pub code: String,
    /// The full name of the statute.
    pub name: String,
    /// The version of the published rates.
    pub version: String,
    /// URL to the official text.
    pub source_url: String,
}

/// A complete set of rates effective from a given date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateSchedule {
    /// The first day on which these rates apply.
    pub effective_date: NaiveDate,
    /// Meal and overnight allowance rates.
    pub allowances: AllowanceRates,
    /// Kilometre rates.
    pub travel: TravelRates,
}

impl RateSchedule {
    /// The 2024 federal schedule compiled into the crate.
    pub fn brkg_2024() -> Self {
        Self {
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            allowances: AllowanceRates::default(),
            travel: TravelRates::default(),
        }
    }
}

/// All rate schedules of one statute, sorted oldest first.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    metadata: StatuteMetadata,
    schedules: Vec<RateSchedule>,
}

impl RatesConfig {
    /// Creates a new RatesConfig from its component parts.
    pub fn new(metadata: StatuteMetadata, schedules: Vec<RateSchedule>) -> Self {
        let mut sorted = schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            schedules: sorted,
        }
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns all schedules.
    pub fn schedules(&self) -> &[RateSchedule] {
        &self.schedules
    }
}
