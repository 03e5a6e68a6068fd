//! Report configuration file handling.
//!
//! Settings can come from a TOML file passed with `--config`; command-line
//! flags override them.
//!
//! # Example Configuration
//!
//! ```toml
//! title = "Nightly dependency report"
//! artifact_url = "https://repo.example.com/artifact"
//! minify = true
//! timestamp = false
//! exclude = ["org.springframework:*", "junit:junit"]
//! min_severity = "minor"
//! ```

use crate::domain::SeverityTier;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default page title
pub const DEFAULT_TITLE: &str = "Version Report";

/// Default base URL for artifact links
pub const DEFAULT_ARTIFACT_URL: &str = "https://mvnrepository.com/artifact";

/// Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// HTML page title and heading.
    pub title: String,

    /// Base URL for artifact links; `/{group}/{name}/{version}` is appended.
    pub artifact_url: String,

    /// Whether HTML output is minified.
    ///
    /// Default: true
    pub minify: bool,

    /// Whether HTML output carries a generation timestamp.
    ///
    /// Default: true
    pub timestamp: bool,

    /// Artifacts to drop from the report. A trailing `*` matches a prefix.
    pub exclude: Vec<String>,

    /// Hide rows that are less stale than this tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<SeverityTier>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            artifact_url: DEFAULT_ARTIFACT_URL.to_string(),
            minify: true,
            timestamp: true,
            exclude: Vec::new(),
            min_severity: None,
        }
    }
}

impl ReportConfig {
    /// Loads configuration from a file, or defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;
        let config = Self::from_toml(&content)
            .map_err(|e| ConfigError::toml_parse_error(path, e.to_string()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Returns the default configuration as TOML.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.title, "Version Report");
        assert_eq!(config.artifact_url, "https://mvnrepository.com/artifact");
        assert!(config.minify);
        assert!(config.timestamp);
        assert!(config.exclude.is_empty());
        assert!(config.min_severity.is_none());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ReportConfig::from_toml("title = \"Nightly\"\nminify = false\n").unwrap();
        assert_eq!(config.title, "Nightly");
        assert!(!config.minify);
        assert_eq!(config.artifact_url, DEFAULT_ARTIFACT_URL);
    }

    #[test]
    fn test_from_toml_full() {
        let toml = r#"
title = "Deps"
artifact_url = "https://repo.example.com/a"
minify = true
timestamp = false
exclude = ["org.springframework:*", "junit:junit"]
min_severity = "minor-behind"
"#;
        let config = ReportConfig::from_toml(toml).unwrap();
        assert_eq!(config.artifact_url, "https://repo.example.com/a");
        assert!(!config.timestamp);
        assert_eq!(config.exclude.len(), 2);
        assert_eq!(config.min_severity, Some(SeverityTier::MinorBehind));
    }

    #[test]
    fn test_from_toml_short_severity() {
        let config = ReportConfig::from_toml("min_severity = \"patch\"").unwrap();
        assert_eq!(config.min_severity, Some(SeverityTier::PatchBehind));
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(ReportConfig::from_toml("minify = \"yes\"").is_err());
    }

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(ReportConfig::load(None).unwrap(), ReportConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "title = \"From file\"").unwrap();

        let config = ReportConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.title, "From file");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReportConfig::load(Some(Path::new("/no/such/depreport.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "exclude = 3").unwrap();

        let err = ReportConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
    }

    #[test]
    fn test_default_toml_round_trips() {
        let parsed = ReportConfig::from_toml(&ReportConfig::default_toml()).unwrap();
        assert_eq!(parsed, ReportConfig::default());
    }
}
