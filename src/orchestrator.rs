//! Report orchestrator for coordinating the whole run
//!
//! This module provides:
//! - Workflow coordination: read → parse → filter → render → write
//! - Merging of configuration file values with CLI overrides
//! - Partial continuation when the input stream fails part-way

use crate::cli::CliArgs;
use crate::config::ReportConfig;
use crate::domain::DependencyReport;
use crate::error::{AppError, ConfigError, InputError, RenderError};
use crate::filter::ReportFilter;
use crate::input;
use crate::output::{create_formatter, OutputConfig};
use crate::parser::parse_lines;
use chrono::Utc;
use std::fs;
use std::io::{self, BufRead, Write};

/// Orchestrator for coordinating the report workflow
pub struct Orchestrator {
    /// CLI arguments
    args: CliArgs,
    /// Settings loaded from the configuration file (or defaults)
    config: ReportConfig,
}

/// Result of running the orchestrator
#[derive(Debug)]
pub struct RunOutcome {
    /// The report as rendered, after filtering
    pub report: DependencyReport,
    /// Error that cut the input short, if any
    pub input_error: Option<InputError>,
}

impl RunOutcome {
    /// Returns true if output was produced from incomplete input
    pub fn is_partial(&self) -> bool {
        self.input_error.is_some()
    }
}

impl Orchestrator {
    /// Create a new orchestrator, loading the configuration file if one was given
    pub fn new(args: CliArgs) -> Result<Self, ConfigError> {
        if args.verbose && args.quiet {
            return Err(ConfigError::ConflictingOptions {
                message: "--verbose and --quiet cannot be used together".to_string(),
            });
        }

        let config = ReportConfig::load(args.config.as_deref())?;
        Ok(Self { args, config })
    }

    /// Create an orchestrator with an already-loaded configuration
    pub fn with_config(args: CliArgs, config: ReportConfig) -> Self {
        Self { args, config }
    }

    /// Filter built from the config file plus CLI flags
    ///
    /// Excludes from both sources are merged; `--min-severity` wins over the file.
    pub fn build_filter(&self) -> ReportFilter {
        let mut exclude = self.config.exclude.clone();
        exclude.extend(self.args.exclude.iter().cloned());

        let filter = ReportFilter::new().with_exclude(exclude);
        match self.args.min_severity.or(self.config.min_severity) {
            Some(tier) => filter.with_min_severity(tier),
            None => filter,
        }
    }

    /// Output settings built from the config file plus CLI flags
    pub fn output_config(&self) -> OutputConfig {
        let title = self
            .args
            .title
            .clone()
            .unwrap_or_else(|| self.config.title.clone());
        let generated_at = (self.config.timestamp && !self.args.no_timestamp).then(Utc::now);

        OutputConfig::new(self.args.output_format())
            .with_title(title)
            .with_artifact_url(self.config.artifact_url.clone())
            .with_minify(self.config.minify && !self.args.no_minify)
            .with_color(!self.args.no_color && self.args.output.is_none())
            .with_generated_at(generated_at)
    }

    /// Read, parse and filter a report from the given reader
    pub fn collect_from<R: BufRead>(&self, reader: R) -> RunOutcome {
        let input = input::read_lines(reader);
        if let Some(error) = &input.error {
            tracing::warn!(error = %error, "input ended early, reporting what was read");
        }
        tracing::debug!(lines = input.lines.len(), "read input");

        let report = parse_lines(&input.lines);

        RunOutcome {
            report: self.build_filter().apply(&report),
            input_error: input.error,
        }
    }

    /// Render a report into memory using the configured format
    pub fn render(&self, report: &DependencyReport) -> Result<Vec<u8>, RenderError> {
        let formatter = create_formatter(&self.output_config());
        let mut buf = Vec::new();
        formatter.format(report, &mut buf)?;
        Ok(buf)
    }

    /// Write a rendered document to the output file, or stdout
    pub fn write_output(&self, document: &[u8]) -> Result<(), RenderError> {
        match &self.args.output {
            Some(path) => {
                fs::write(path, document).map_err(|e| RenderError::create_error(path, e))?;
                tracing::debug!(path = %path.display(), bytes = document.len(), "wrote report");
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(document)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }

    /// Run the whole workflow
    ///
    /// Nothing is written unless rendering succeeds, so a failed run leaves
    /// no partial document behind.
    pub fn run(&self) -> Result<RunOutcome, AppError> {
        let reader = input::open(self.args.input.as_deref())?;
        let outcome = self.collect_from(reader);
        let document = self.render(&outcome.report)?;
        self.write_output(&document)?;
        Ok(outcome)
    }
}
