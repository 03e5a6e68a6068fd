//! Non-fatal diagnostics raised while parsing a report

use serde::{Deserialize, Serialize};
use std::fmt;

/// Something in the input that could not be parsed cleanly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// A wrapped-row fragment appeared before any other candidate line
    OrphanContinuation { line: usize },
    /// A dependency row appeared before any module header
    ModulelessDependency { line: usize, artifact: String },
    /// A dependency row split into fewer than three fields
    MalformedDependency { line: usize, content: String },
}

impl ParseWarning {
    /// Physical input line the warning refers to
    pub fn line(&self) -> usize {
        match self {
            ParseWarning::OrphanContinuation { line }
            | ParseWarning::ModulelessDependency { line, .. }
            | ParseWarning::MalformedDependency { line, .. } => *line,
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWarning::OrphanContinuation { line } => {
                write!(f, "line {}: continuation fragment with no row to join", line)
            }
            ParseWarning::ModulelessDependency { line, artifact } => {
                write!(f, "line {}: '{}' listed before any module header", line, artifact)
            }
            ParseWarning::MalformedDependency { line, content } => {
                write!(f, "line {}: incomplete dependency row '{}'", line, content)
            }
        }
    }
}
