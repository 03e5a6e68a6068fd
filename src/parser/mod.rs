//! Dependency-update report parsing
//!
//! Turns the raw output of `mvn versions:display-dependency-updates` into a
//! [`DependencyReport`] in three passes:
//! - line filtering (keep `[INFO]` and module-header lines)
//! - reassembly of rows Maven wrapped over two lines
//! - extraction of module headers and dependency rows

mod extractor;
mod line_filter;
mod reassembler;

pub use extractor::{classify_line, extract, normalize, participates, LineKind, ModuleState};
pub use line_filter::{filter_lines, is_candidate};
pub use reassembler::{is_continuation, reassemble, Reassembled};

use crate::domain::DependencyReport;

/// Prefix Maven puts on informational log lines
pub const INFO_TAG: &str = "[INFO]";
/// Text that marks a module header line
pub const MODULE_MARKER: &str = "Building";
/// Separator between current and latest version
pub const ARROW: &str = "->";
/// Dot leader that only appears on a row's first physical line
pub const ELLIPSIS: &str = "...";

/// A candidate line tagged with its 1-based physical line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Runs the full pipeline over raw input lines
pub fn parse_lines<I, S>(lines: I) -> DependencyReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filtered = filter_lines(lines);
    tracing::debug!(candidates = filtered.len(), "filtered input lines");

    let reassembled = reassemble(filtered);
    let mut report = extract(reassembled.lines());

    report.warnings.extend(reassembled.warnings);
    report.warnings.sort_by_key(|w| w.line());

    tracing::debug!(
        modules = report.modules.len(),
        dependencies = report.dependency_count(),
        warnings = report.warnings.len(),
        "extracted dependency report"
    );
    report
}

/// Parses a whole report held in memory
pub fn parse_str(input: &str) -> DependencyReport {
    parse_lines(input.lines())
}
