//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory rate
//! schedules from YAML files.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::calculation::Calculator;
use crate::error::{EngineError, EngineResult};

use super::types::{RateSchedule, RatesConfig, StatuteMetadata};

/// Loads and provides access to rate schedules.
///
/// # Directory Structure
///
/// ```text
/// config/brkg/
/// ├── statute.yaml        # Statute metadata
/// └── rates/
///     └── 2024-01-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use trennungsgeld::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/brkg").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let calculator = loader.calculator_for(date).unwrap();
/// println!("Full day rate: {}", calculator.allowance_rates().full_day);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RatesConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if `statute.yaml` or the `rates` directory is missing, if any
    /// file contains invalid YAML, if a schedule carries a negative rate, or
    /// if two schedules share an effective date.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statute_path = path.join("statute.yaml");
        let metadata = Self::load_yaml::<StatuteMetadata>(&statute_path)?;

        let rates_dir = path.join("rates");
        let schedules = Self::load_schedules(&rates_dir)?;

        debug!(
            statute = %metadata.code,
            schedules = schedules.len(),
            "Loaded rate configuration"
        );

        Ok(Self {
            config: RatesConfig::new(metadata, schedules),
        })
    }

    /// Returns a loader holding only the compiled-in 2024 BRKG schedule.
    pub fn builtin() -> Self {
        let metadata = StatuteMetadata {
            code: "BRKG".to_string(),
            name: "Bundesreisekostengesetz".to_string(),
            version: "2024-01-01".to_string(),
            source_url: "https://www.gesetze-im-internet.de/brkg_2005/".to_string(),
        };
        Self {
            config: RatesConfig::new(metadata, vec![RateSchedule::brkg_2024()]),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all schedule files from the rates directory.
    fn load_schedules(rates_dir: &Path) -> EngineResult<Vec<RateSchedule>> {
        let rates_dir_str = rates_dir.display().to_string();

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut schedules = Vec::new();
        let mut seen: BTreeMap<NaiveDate, PathBuf> = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let schedule = Self::load_yaml::<RateSchedule>(&path)?;
                schedule
                    .allowances
                    .validate()
                    .and_then(|_| schedule.travel.validate())
                    .map_err(|e| EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                if let Some(first) = seen.insert(schedule.effective_date, path.clone()) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "effective_date {} is already defined in {}",
                            schedule.effective_date,
                            first.display()
                        ),
                    });
                }
                schedules.push(schedule);
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying rate configuration.
    pub fn config(&self) -> &RatesConfig {
        &self.config
    }

    /// Returns the statute metadata.
    pub fn statute(&self) -> &StatuteMetadata {
        self.config.statute()
    }

    /// Finds the most recent schedule effective on or before `date`.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&RateSchedule> {
        self.config
            .schedules()
            .iter()
            .rev()
            .find(|s| s.effective_date <= date)
            .ok_or(EngineError::RatesNotFound { date })
    }

    /// Returns the newest schedule.
    pub fn latest(&self) -> Option<&RateSchedule> {
        self.config.schedules().last()
    }

    /// Builds a calculator from the schedule effective on `date`.
    pub fn calculator_for(&self, date: NaiveDate) -> EngineResult<Calculator> {
        let schedule = self.rates_for(date)?;
        Ok(Calculator::new(schedule.allowances, schedule.travel))
    }
}
