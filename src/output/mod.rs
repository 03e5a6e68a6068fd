//! Output formatting for dependency reports
//!
//! This module provides:
//! - HTML output for sharing (the default)
//! - JSON output for machine processing
//! - Text output for terminal display

mod html;
mod json;
pub mod minify;
mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::config::{DEFAULT_ARTIFACT_URL, DEFAULT_TITLE};
use crate::domain::DependencyReport;
use crate::error::RenderError;
use chrono::{DateTime, Utc};
use std::io::Write;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Self-contained HTML page
    #[default]
    Html,
    /// JSON output for machine processing
    Json,
    /// Human-readable text output
    Text,
}

impl OutputFormat {
    /// Select a format from the CLI format flags
    pub fn from_flags(json: bool, text: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if text {
            OutputFormat::Text
        } else {
            OutputFormat::Html
        }
    }
}

/// Configuration for output formatting
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (html, json, text)
    pub format: OutputFormat,
    /// HTML page title
    pub title: String,
    /// Base URL for artifact links
    pub artifact_url: String,
    /// Whether to minify HTML output
    pub minify: bool,
    /// Whether to use colors (text only)
    pub color: bool,
    /// Generation time shown in the HTML footer
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            title: DEFAULT_TITLE.to_string(),
            artifact_url: DEFAULT_ARTIFACT_URL.to_string(),
            minify: true,
            color: true,
            generated_at: None,
        }
    }
}

impl OutputConfig {
    /// Create a new output configuration for a format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the artifact link base URL
    pub fn with_artifact_url(mut self, url: impl Into<String>) -> Self {
        self.artifact_url = url.into();
        self
    }

    /// Enable or disable HTML minification
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Enable or disable colored text output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the generation timestamp
    pub fn with_generated_at(mut self, generated_at: Option<DateTime<Utc>>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write the report
    fn format(&self, report: &DependencyReport, writer: &mut dyn Write) -> Result<(), RenderError>;
}

/// Create an output formatter based on configuration
pub fn create_formatter(config: &OutputConfig) -> Box<dyn OutputFormatter> {
    match config.format {
        OutputFormat::Html => Box::new(HtmlFormatter::new(config)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Text => Box::new(TextFormatter::with_color(config.color)),
    }
}
