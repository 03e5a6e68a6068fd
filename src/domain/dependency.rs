//! Dependency record structures

use super::{classify, SeverityTier};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single outdated-dependency row recovered from the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    /// Artifact coordinates in `group:name` form
    pub artifact: String,
    /// Version currently in use
    pub current_version: String,
    /// Newest version the build tool knows about
    pub latest_version: String,
    /// Physical input line the row started on
    #[serde(skip)]
    pub line: usize,
}

impl DependencyRecord {
    /// Creates a new dependency record
    pub fn new(
        artifact: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            artifact: artifact.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
            line: 0,
        }
    }

    /// Sets the source line number (builder pattern)
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Classifies how far behind the current version is.
    ///
    /// Computed on every call; the tier is never stored on the record.
    pub fn severity(&self) -> SeverityTier {
        classify(&self.current_version, &self.latest_version)
    }

    /// Splits the artifact into `(group, name)` when it has that shape
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let mut parts = self.artifact.split(':');
        let group = parts.next().filter(|g| !g.is_empty())?;
        let name = parts.next().filter(|n| !n.is_empty())?;
        Some((group, name))
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {}",
            self.artifact, self.current_version, self.latest_version
        )
    }
}
