//! Vehicle selector for kilometre-based reimbursement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Accepted vehicle selectors, in the order they are listed to users.
pub const VEHICLE_CHOICES: [&str; 4] = ["car", "motorcycle", "bike", "bicycle"];

/// The means of transport a distance was covered with.
///
/// Parsing accepts `car`, `motorcycle`, `bike` and `bicycle`; the last two
/// both select [`Vehicle::Bicycle`].
///
/// # Example
///
/// ```
/// use trennungsgeld::models::Vehicle;
///
/// assert_eq!("bike".parse::<Vehicle>().unwrap(), Vehicle::Bicycle);
/// assert!("plane".parse::<Vehicle>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vehicle {
    /// Private car.
    Car,
    /// Motorcycle.
    Motorcycle,
    /// Bicycle.
    #[serde(alias = "bike")]
    Bicycle,
}

impl Vehicle {
    /// Returns the canonical selector for this vehicle.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vehicle::Car => "car",
            Vehicle::Motorcycle => "motorcycle",
            Vehicle::Bicycle => "bicycle",
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vehicle {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Vehicle::Car),
            "motorcycle" => Ok(Vehicle::Motorcycle),
            "bike" | "bicycle" => Ok(Vehicle::Bicycle),
            other => Err(EngineError::UnsupportedVehicle {
                vehicle: other.to_string(),
                choices: VEHICLE_CHOICES.join(", "),
            }),
        }
    }
}
