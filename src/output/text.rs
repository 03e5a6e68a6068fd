//! Text output formatter for terminal display
//!
//! This module provides:
//! - One block per module with aligned `artifact current -> latest` rows
//! - Severity labels colored by tier (major/minor/patch)
//! - Summary footer with per-tier counts
//! - Parse warnings listed after the summary

use crate::domain::{DependencyReport, ModuleReport, ReportSummary, SeverityTier};
use crate::error::RenderError;
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self { color: true }
    }

    /// Create a new text formatter with color option
    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// Get the label for a tier, colored when enabled
    fn tier_label(&self, tier: SeverityTier) -> String {
        let label = tier.label();
        if !self.color {
            return label.to_string();
        }
        match tier {
            SeverityTier::MajorBehind => label.red().bold().to_string(),
            SeverityTier::MinorBehind => label.yellow().to_string(),
            SeverityTier::PatchBehind => label.cyan().to_string(),
            SeverityTier::UpToDate => label.dimmed().to_string(),
        }
    }

    /// Format one module block
    fn format_module(&self, module: &ModuleReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let name = if module.is_unnamed() {
            "(no module)"
        } else {
            module.name.as_str()
        };
        if self.color {
            writeln!(writer, "{}", name.bold())?;
        } else {
            writeln!(writer, "{}", name)?;
        }

        let width = module
            .dependencies
            .iter()
            .map(|d| d.artifact.len())
            .max()
            .unwrap_or(0);

        for record in &module.dependencies {
            let label = self.tier_label(record.severity());
            if self.color {
                writeln!(
                    writer,
                    "  {:width$} {} {} {} [{}]",
                    record.artifact,
                    record.current_version.dimmed(),
                    "->".dimmed(),
                    record.latest_version.bright_white().bold(),
                    label,
                    width = width
                )?;
            } else {
                writeln!(
                    writer,
                    "  {:width$} {} -> {} [{}]",
                    record.artifact,
                    record.current_version,
                    record.latest_version,
                    label,
                    width = width
                )?;
            }
        }
        Ok(())
    }

    /// Format the summary footer
    fn format_summary(&self, summary: &ReportSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let counts: Vec<String> = SeverityTier::all()
            .iter()
            .map(|tier| format!("{} {}", summary.count(*tier), self.tier_label(*tier)))
            .collect();
        writeln!(
            writer,
            "{} {} in {} {}: {}",
            summary.dependencies,
            if summary.dependencies == 1 {
                "dependency"
            } else {
                "dependencies"
            },
            summary.modules,
            if summary.modules == 1 { "module" } else { "modules" },
            counts.join(", ")
        )
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &DependencyReport, writer: &mut dyn Write) -> Result<(), RenderError> {
        if report.is_empty() {
            writeln!(writer, "No dependency updates found")?;
            return Ok(());
        }

        for module in &report.modules {
            self.format_module(module, writer)?;
            writeln!(writer)?;
        }
        self.format_summary(&ReportSummary::from_report(report), writer)?;

        if !report.warnings.is_empty() {
            writeln!(writer)?;
            for warning in &report.warnings {
                writeln!(writer, "warning: {}", warning)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyRecord, ParseWarning};

    fn format_plain(report: &DependencyReport) -> String {
        let mut buf = Vec::new();
        TextFormatter::with_color(false).format(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(format_plain(&DependencyReport::new()), "No dependency updates found\n");
    }

    #[test]
    fn test_text_aligned_rows() {
        let mut report = DependencyReport::new();
        report.push("core", DependencyRecord::new("junit:junit", "4.13.1", "4.13.2"));
        report.push("core", DependencyRecord::new("org.slf4j:slf4j-api", "1.7.36", "2.0.9"));

        let output = format_plain(&report);
        let expected = "\
core
  junit:junit         4.13.1 -> 4.13.2 [patch]
  org.slf4j:slf4j-api 1.7.36 -> 2.0.9 [major]

2 dependencies in 1 module: 1 major, 0 minor, 1 patch, 0 current
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_text_unnamed_module() {
        let mut report = DependencyReport::new();
        report.push("", DependencyRecord::new("a:a", "1.0", "1.0"));
        let output = format_plain(&report);
        assert!(output.starts_with("(no module)\n"));
        assert!(output.contains("1 dependency in 1 module"));
    }

    #[test]
    fn test_text_lists_warnings() {
        let mut report = DependencyReport::new();
        report.push("", DependencyRecord::new("a:a", "1.0", "2.0"));
        report.warn(ParseWarning::ModulelessDependency {
            line: 1,
            artifact: "a:a".to_string(),
        });
        let output = format_plain(&report);
        assert!(output.ends_with("\nwarning: line 1: 'a:a' listed before any module header\n"));
    }

    #[test]
    fn test_tier_label_plain() {
        let formatter = TextFormatter::with_color(false);
        assert_eq!(formatter.tier_label(SeverityTier::MajorBehind), "major");
        assert_eq!(formatter.tier_label(SeverityTier::UpToDate), "current");
    }
}
