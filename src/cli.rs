//! CLI argument parsing module for depreport

use crate::domain::SeverityTier;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Maven dependency-update report generator
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depreport",
    version,
    about = "Turns `mvn versions:display-dependency-updates` output into an HTML staleness report"
)]
pub struct CliArgs {
    // Input/output
    /// Read the Maven log from this file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the report to this file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    // General options
    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - only log errors
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output the report in JSON format
    #[arg(long, conflicts_with = "text")]
    pub json: bool,

    /// Output the report as a terminal table
    #[arg(long)]
    pub text: bool,

    /// Do not minify HTML output
    #[arg(long)]
    pub no_minify: bool,

    /// Disable colors in text output
    #[arg(long)]
    pub no_color: bool,

    /// Omit the generation timestamp from HTML output
    #[arg(long)]
    pub no_timestamp: bool,

    /// HTML page title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    // Filters
    /// Exclude artifacts from the report (can be specified multiple times; trailing * matches a prefix)
    #[arg(long, value_name = "ARTIFACT", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Hide rows less stale than this tier (patch, minor, major)
    #[arg(long, value_name = "TIER")]
    pub min_severity: Option<SeverityTier>,
}

impl CliArgs {
    /// Output format selected by the format flags
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.text)
    }

    /// Check if the report is read from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.is_none()
    }
}
