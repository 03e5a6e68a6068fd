//! depreport - Maven dependency-update report CLI tool
//!
//! Reads `mvn versions:display-dependency-updates` output from stdin or a
//! file and writes an HTML (or JSON/text) report of how far each module's
//! dependencies lag behind.

use clap::Parser;
use depreport::cli::CliArgs;
use depreport::orchestrator::Orchestrator;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, args.quiet);

    // Run the main logic and handle errors
    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "depreport=debug"
    } else if quiet {
        "depreport=error"
    } else {
        "depreport=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting depreport");

    let orchestrator = Orchestrator::new(args)?;
    let outcome = orchestrator.run()?;

    if outcome.is_partial() {
        // Partial success - report written from incomplete input
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
