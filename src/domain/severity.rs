//! Severity tiers and version-drift classification
//!
//! Versions are compared component by component as plain strings. The
//! classifier reports *drift* (the components differ), never direction, so
//! `2.0.0 -> 1.0.0` is just as "major-behind" as `1.0.0 -> 2.0.0`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How stale a dependency is, judged by the coarsest differing component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityTier {
    /// Major components differ
    #[serde(alias = "major")]
    MajorBehind,
    /// Minor components differ
    #[serde(alias = "minor")]
    MinorBehind,
    /// Patch components differ
    #[serde(alias = "patch")]
    PatchBehind,
    /// No component differs
    #[serde(alias = "current")]
    UpToDate,
}

impl SeverityTier {
    /// Returns the kebab-case identifier for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::MajorBehind => "major-behind",
            SeverityTier::MinorBehind => "minor-behind",
            SeverityTier::PatchBehind => "patch-behind",
            SeverityTier::UpToDate => "up-to-date",
        }
    }

    /// Short label used in terminal output
    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::MajorBehind => "major",
            SeverityTier::MinorBehind => "minor",
            SeverityTier::PatchBehind => "patch",
            SeverityTier::UpToDate => "current",
        }
    }

    /// Ordering weight: higher is staler
    pub fn rank(&self) -> u8 {
        match self {
            SeverityTier::UpToDate => 0,
            SeverityTier::PatchBehind => 1,
            SeverityTier::MinorBehind => 2,
            SeverityTier::MajorBehind => 3,
        }
    }

    /// Returns true if this tier is at least as stale as `other`
    pub fn at_least(&self, other: SeverityTier) -> bool {
        self.rank() >= other.rank()
    }

    /// Returns all tiers, stalest first
    pub fn all() -> &'static [SeverityTier] {
        &[
            SeverityTier::MajorBehind,
            SeverityTier::MinorBehind,
            SeverityTier::PatchBehind,
            SeverityTier::UpToDate,
        ]
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "major-behind" => Ok(SeverityTier::MajorBehind),
            "minor" | "minor-behind" => Ok(SeverityTier::MinorBehind),
            "patch" | "patch-behind" => Ok(SeverityTier::PatchBehind),
            "current" | "up-to-date" => Ok(SeverityTier::UpToDate),
            other => Err(format!(
                "invalid severity '{}': expected 'major', 'minor', 'patch' or 'current'",
                other
            )),
        }
    }
}

/// Major/minor/patch view over a dot-separated version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionComponents<'a> {
    pub major: &'a str,
    pub minor: &'a str,
    pub patch: &'a str,
}

impl<'a> VersionComponents<'a> {
    /// Decomposes a version string.
    ///
    /// Missing components default to `"0"`. A two-segment version reuses its
    /// minor component as the patch, so `"1.2"` reads as `1 / 2 / 2`.
    pub fn parse(version: &'a str) -> Self {
        let parts: Vec<&str> = version.split('.').collect();
        let major = parts[0];
        let minor = parts.get(1).copied().unwrap_or("0");
        let patch = match parts.len() {
            2 => parts[1],
            n if n >= 3 => parts[2],
            _ => "0",
        };
        Self {
            major,
            minor,
            patch,
        }
    }
}

/// Classifies the drift between the current and latest version strings
pub fn classify(current: &str, latest: &str) -> SeverityTier {
    let current = VersionComponents::parse(current);
    let latest = VersionComponents::parse(latest);

    if current.major != latest.major {
        SeverityTier::MajorBehind
    } else if current.minor != latest.minor {
        SeverityTier::MinorBehind
    } else if current.patch != latest.patch {
        SeverityTier::PatchBehind
    } else {
        SeverityTier::UpToDate
    }
}
