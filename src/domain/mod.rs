//! Core domain models for depreport
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency rows recovered from the build log
//! - Module-grouped reports and their summaries
//! - Severity tiers and the version-drift classifier
//! - Parse warnings for input that degrades instead of failing

mod dependency;
mod report;
mod severity;
mod summary;
mod warning;

pub use dependency::DependencyRecord;
pub use report::{DependencyReport, ModuleReport};
pub use severity::{classify, SeverityTier, VersionComponents};
pub use summary::ReportSummary;
pub use warning::ParseWarning;
