//! Rate configuration for the Trennungsgeld engine.
//!
//! The rate tables are plain immutable values. [`AllowanceRates::default`]
//! and [`TravelRates::default`] carry the 2024 BRKG figures; other statutory
//! years can be loaded from YAML with [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use trennungsgeld::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/brkg").unwrap();
//! println!("Loaded statute: {}", config.statute().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AllowanceRates, RateSchedule, RatesConfig, StatuteMetadata, TravelRates};
