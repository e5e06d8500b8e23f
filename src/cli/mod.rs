//! Command-line front end.
//!
//! Parses arguments, picks the rate schedule, and dispatches to the
//! `calculate`, `prompt` and `serve` commands. All domain decisions are left
//! to the calculation engine.

mod args;
mod prompt;

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::api::{AppState, create_router};
use crate::calculation::Calculator;
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::report::format_breakdown;

pub use args::{CalculateArgs, Command, ServeArgs, TrennungsgeldCli, apply_document};
pub use prompt::{Prompter, run_prompt};

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The calculation or configuration failed.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The JSON input document could not be used.
    #[error("Failed to read input file '{path}': {message}")]
    InputFile {
        /// Path of the input document.
        path: String,
        /// A description of the problem.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Loads the rate configuration named on the command line.
pub fn load_config(cli: &TrennungsgeldCli) -> Result<ConfigLoader, CliError> {
    match &cli.rates {
        Some(dir) => Ok(ConfigLoader::load(dir)?),
        None => Ok(ConfigLoader::builtin()),
    }
}

/// Builds the calculator for the requested date, or for the newest schedule.
pub fn select_calculator(
    config: &ConfigLoader,
    cli: &TrennungsgeldCli,
) -> Result<Calculator, CliError> {
    match cli.date {
        Some(date) => Ok(config.calculator_for(date)?),
        None => {
            let schedule = config.latest().ok_or_else(|| EngineError::ConfigNotFound {
                path: "no rate schedule loaded".to_string(),
            })?;
            Ok(Calculator::new(schedule.allowances, schedule.travel))
        }
    }
}

/// Runs the parsed command line.
pub async fn run(cli: TrennungsgeldCli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    let calculator = select_calculator(&config, &cli)?;

    match &cli.command {
        Command::Calculate(args) => {
            let (allowance, travel) = args.build_inputs()?;
            let result = calculator.calculate(&allowance, &travel)?;

            let mut stdout = io::stdout().lock();
            for line in format_breakdown(&result) {
                writeln!(stdout, "{}", line)?;
            }
            Ok(())
        }
        Command::Prompt => {
            run_prompt(io::stdin().lock(), io::stdout().lock(), &calculator)?;
            Ok(())
        }
        Command::Serve(args) => {
            let listener = tokio::net::TcpListener::bind(args.listen).await?;
            info!(
                listen = %args.listen,
                statute = %config.statute().code,
                "Trennungsgeld API listening"
            );
            axum::serve(listener, create_router(AppState::new(config))).await?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;
    use rust_decimal::Decimal;

    #[test]
    fn test_builtin_config_without_rates_flag() {
        let cli = TrennungsgeldCli::try_parse_from(["trennungsgeld", "prompt"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.statute().code, "BRKG");
    }

    #[test]
    fn test_rates_directory_is_loaded() {
        let cli = TrennungsgeldCli::try_parse_from([
            "trennungsgeld",
            "--rates",
            "./config/brkg",
            "prompt",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.config().schedules().len(), 1);
    }

    #[test]
    fn test_date_before_schedules_is_rejected() {
        let cli = TrennungsgeldCli::try_parse_from([
            "trennungsgeld",
            "--date",
            "2010-01-01",
            "prompt",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        match select_calculator(&config, &cli) {
            Err(CliError::Engine(EngineError::RatesNotFound { date })) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
            }
            other => panic!("Expected RatesNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_latest_schedule_selected_by_default() {
        let cli = TrennungsgeldCli::try_parse_from(["trennungsgeld", "prompt"]).unwrap();
        let calculator = select_calculator(&ConfigLoader::builtin(), &cli).unwrap();
        assert_eq!(calculator.allowance_rates().full_day, Decimal::new(28, 0));
    }

    #[test]
    fn test_engine_error_display_is_transparent() {
        let err = CliError::from(EngineError::invalid_input(
            "commuting_days",
            "commuting days must be non-negative",
        ));
        assert_eq!(
            err.to_string(),
            "Invalid input 'commuting_days': commuting days must be non-negative"
        );
    }
}
