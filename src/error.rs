//! Error types for the Trennungsgeld engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while estimating an allowance.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Trennungsgeld engine.
///
/// Validation failures abort the whole calculation; the first violated rule
/// is the one reported.
///
/// # Example
///
/// ```
/// use trennungsgeld::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "weekly_home_trips".to_string(),
///     message: "home trips must be non-negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'weekly_home_trips': home trips must be non-negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An input record violated a domain rule.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that failed validation.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// The vehicle selector is not one of the supported choices.
    #[error("Unsupported vehicle '{vehicle}'. Choose from {choices}.")]
    UnsupportedVehicle {
        /// The rejected selector.
        vehicle: String,
        /// Comma separated list of accepted selectors.
        choices: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate schedule is effective on the requested date.
    #[error("No rate schedule effective on {date}")]
    RatesNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
