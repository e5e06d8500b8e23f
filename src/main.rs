//! Trennungsgeld command-line entry point.
//!
//! Installs logging on stderr, parses the arguments and hands over to
//! [`trennungsgeld::cli::run`].

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trennungsgeld::cli::{TrennungsgeldCli, run};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = TrennungsgeldCli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Calculation aborted");
            eprintln!("Fehler: {}", err);
            ExitCode::FAILURE
        }
    }
}
