//! HTTP API module for the Trennungsgeld engine.
//!
//! This module provides the REST endpoint for estimating an allowance from a
//! JSON document.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
