//! Report filter configuration
//!
//! This module provides the ReportFilter struct that drops excluded
//! artifacts and rows below a minimum staleness from a report.

use crate::domain::{DependencyReport, ModuleReport, SeverityTier};

/// Filter configuration applied before rendering
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Artifact patterns to drop; a trailing `*` matches a prefix
    pub exclude: Vec<String>,
    /// Hide rows less stale than this tier
    pub min_severity: Option<SeverityTier>,
}

impl ReportFilter {
    /// Create a new ReportFilter that keeps everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set artifact patterns to exclude
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// Set the minimum tier to keep
    pub fn with_min_severity(mut self, tier: SeverityTier) -> Self {
        self.min_severity = Some(tier);
        self
    }

    /// Returns true if the filter would never drop anything
    pub fn is_noop(&self) -> bool {
        self.exclude.is_empty() && self.min_severity.is_none()
    }

    /// Check if an artifact is excluded
    pub fn is_excluded(&self, artifact: &str) -> bool {
        self.exclude.iter().any(|pattern| match pattern.strip_suffix('*') {
            Some(prefix) => artifact.starts_with(prefix),
            None => pattern == artifact,
        })
    }

    /// Check if a tier passes the minimum severity
    pub fn passes_severity(&self, tier: SeverityTier) -> bool {
        self.min_severity.map_or(true, |min| tier.at_least(min))
    }

    /// Produces a filtered copy of the report; modules left empty are dropped
    pub fn apply(&self, report: &DependencyReport) -> DependencyReport {
        if self.is_noop() {
            return report.clone();
        }

        let modules = report
            .modules
            .iter()
            .filter_map(|module| {
                let dependencies: Vec<_> = module
                    .dependencies
                    .iter()
                    .filter(|d| !self.is_excluded(&d.artifact) && self.passes_severity(d.severity()))
                    .cloned()
                    .collect();
                (!dependencies.is_empty()).then(|| ModuleReport {
                    name: module.name.clone(),
                    dependencies,
                })
            })
            .collect();

        let filtered = DependencyReport {
            modules,
            warnings: report.warnings.clone(),
        };
        tracing::debug!(
            before = report.dependency_count(),
            after = filtered.dependency_count(),
            "applied report filter"
        );
        filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyRecord, ParseWarning};

    fn sample_report() -> DependencyReport {
        let mut report = DependencyReport::new();
        report.push("core", DependencyRecord::new("org.springframework:spring-core", "5.3.0", "6.1.0"));
        report.push("core", DependencyRecord::new("junit:junit", "4.13.1", "4.13.2"));
        report.push("web", DependencyRecord::new("org.springframework:spring-web", "6.1.0", "6.1.0"));
        report.warn(ParseWarning::OrphanContinuation { line: 1 });
        report
    }

    #[test]
    fn test_new_filter_is_noop() {
        let filter = ReportFilter::new();
        assert!(filter.is_noop());
        assert_eq!(filter.apply(&sample_report()), sample_report());
    }

    #[test]
    fn test_is_excluded_exact() {
        let filter = ReportFilter::new().with_exclude(vec!["junit:junit".to_string()]);
        assert!(filter.is_excluded("junit:junit"));
        assert!(!filter.is_excluded("junit:junit-bom"));
    }

    #[test]
    fn test_is_excluded_prefix() {
        let filter = ReportFilter::new().with_exclude(vec!["org.springframework:*".to_string()]);
        assert!(filter.is_excluded("org.springframework:spring-core"));
        assert!(!filter.is_excluded("org.springframework.boot:spring-boot"));
    }

    #[test]
    fn test_passes_severity() {
        let filter = ReportFilter::new().with_min_severity(SeverityTier::MinorBehind);
        assert!(filter.passes_severity(SeverityTier::MajorBehind));
        assert!(filter.passes_severity(SeverityTier::MinorBehind));
        assert!(!filter.passes_severity(SeverityTier::PatchBehind));
        assert!(!filter.passes_severity(SeverityTier::UpToDate));
    }

    #[test]
    fn test_apply_exclude_drops_empty_modules() {
        let filter = ReportFilter::new().with_exclude(vec!["org.springframework:*".to_string()]);
        let filtered = filter.apply(&sample_report());

        assert_eq!(filtered.modules.len(), 1);
        assert_eq!(filtered.modules[0].name, "core");
        assert_eq!(filtered.modules[0].dependencies[0].artifact, "junit:junit");
        assert_eq!(filtered.warnings.len(), 1);
    }

    #[test]
    fn test_apply_min_severity_hides_up_to_date() {
        let filter = ReportFilter::new().with_min_severity(SeverityTier::PatchBehind);
        let filtered = filter.apply(&sample_report());

        assert!(filtered.module("web").is_none());
        assert_eq!(filtered.dependency_count(), 2);
    }
}
