//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of the module-grouped report
//! - Per-row severity computed at render time
//! - Summary counts and parse warnings

use crate::domain::{DependencyReport, ParseWarning, ReportSummary, SeverityTier};
use crate::error::RenderError;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Summary statistics
    summary: ReportSummary,
    /// Per-module rows
    modules: Vec<JsonModule<'a>>,
    /// Parse warnings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<ParseWarning>,
}

/// JSON representation of a module
#[derive(Serialize)]
struct JsonModule<'a> {
    /// Module name (empty when rows preceded every header)
    name: &'a str,
    /// Rows in input order
    dependencies: Vec<JsonDependency<'a>>,
}

/// JSON representation of a dependency row
#[derive(Serialize)]
struct JsonDependency<'a> {
    artifact: &'a str,
    current_version: &'a str,
    latest_version: &'a str,
    severity: SeverityTier,
}

impl JsonFormatter {
    fn to_output<'a>(&self, report: &'a DependencyReport) -> JsonOutput<'a> {
        let modules = report
            .modules
            .iter()
            .map(|module| JsonModule {
                name: &module.name,
                dependencies: module
                    .dependencies
                    .iter()
                    .map(|d| JsonDependency {
                        artifact: &d.artifact,
                        current_version: &d.current_version,
                        latest_version: &d.latest_version,
                        severity: d.severity(),
                    })
                    .collect(),
            })
            .collect();

        JsonOutput {
            summary: ReportSummary::from_report(report),
            modules,
            warnings: report.warnings.clone(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &DependencyReport, writer: &mut dyn Write) -> Result<(), RenderError> {
        let output = self.to_output(report);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}
