//! Report summary counts
//!
//! Severity is recomputed from each record; nothing is cached on the report.

use super::{DependencyReport, SeverityTier};
use serde::{Deserialize, Serialize};

/// Per-tier counts over a dependency report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of modules with at least one row
    pub modules: usize,
    /// Number of dependency rows
    pub dependencies: usize,
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
    pub up_to_date: usize,
}

impl ReportSummary {
    /// Counts modules, rows and tiers in a report
    pub fn from_report(report: &DependencyReport) -> Self {
        let mut summary = Self {
            modules: report.modules.len(),
            ..Self::default()
        };
        for (_, record) in report.records() {
            summary.add(record.severity());
        }
        summary
    }

    fn add(&mut self, tier: SeverityTier) {
        self.dependencies += 1;
        match tier {
            SeverityTier::MajorBehind => self.major += 1,
            SeverityTier::MinorBehind => self.minor += 1,
            SeverityTier::PatchBehind => self.patch += 1,
            SeverityTier::UpToDate => self.up_to_date += 1,
        }
    }

    /// Returns the count for a single tier
    pub fn count(&self, tier: SeverityTier) -> usize {
        match tier {
            SeverityTier::MajorBehind => self.major,
            SeverityTier::MinorBehind => self.minor,
            SeverityTier::PatchBehind => self.patch,
            SeverityTier::UpToDate => self.up_to_date,
        }
    }

    /// Rows that are behind in any component
    pub fn outdated(&self) -> usize {
        self.major + self.minor + self.patch
    }
}
