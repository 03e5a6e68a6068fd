//! Module and dependency extraction
//!
//! Walks reassembled lines once. Header lines move the extractor into a new
//! module; rows are appended to whichever module is current.
//!
//! A row is normalized by turning every dot leader (`..`, `...`, ...) and
//! every `->` into `|` and then split on `|`:
//!
//! ```text
//!   junit:junit ............ 4.13.1 -> 4.13.2
//!   junit:junit | 4.13.1 | 4.13.2
//! ```

use crate::domain::{DependencyRecord, DependencyReport, ParseWarning};
use crate::parser::{SourceLine, ARROW, MODULE_MARKER};
use regex::Regex;
use std::sync::LazyLock;

const SEPARATOR: &str = "|";

// Dot leaders between artifact and version: two or more periods
static DOT_LEADER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());

/// Which module rows are currently attributed to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleState {
    /// No header seen yet (or the last header had no name)
    #[default]
    NoModule,
    /// Rows belong to the named module
    InModule(String),
}

impl ModuleState {
    /// Report key for rows seen in this state
    pub fn key(&self) -> &str {
        match self {
            ModuleState::NoModule => "",
            ModuleState::InModule(name) => name,
        }
    }

    fn enter(name: &str) -> Self {
        if name.is_empty() {
            ModuleState::NoModule
        } else {
            ModuleState::InModule(name.to_string())
        }
    }
}

/// What a single reassembled line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Starts a new module
    Header(String),
    /// Artifact, current version, latest version
    Row(String, String, String),
    /// Looked like a row but had fewer than three fields, or an empty one
    Incomplete(Vec<String>),
}

/// Returns true if the extractor should look at this line at all
pub fn participates(text: &str) -> bool {
    text.contains(ARROW) || text.contains(MODULE_MARKER)
}

/// Rewrites dot leaders and arrows to the separator and drops the header marker
pub fn normalize(text: &str) -> String {
    DOT_LEADER_RE
        .replace_all(text, SEPARATOR)
        .replace(ARROW, SEPARATOR)
        .replace(MODULE_MARKER, "")
}

/// Classifies one participating line
pub fn classify_line(text: &str) -> LineKind {
    let normalized = normalize(text);
    let fields: Vec<&str> = normalized.split(SEPARATOR).map(str::trim).collect();

    match fields.as_slice() {
        [header] => {
            let name = header.split_whitespace().next().unwrap_or("");
            LineKind::Header(name.to_string())
        }
        [artifact, current, latest, ..]
            if !artifact.is_empty() && !current.is_empty() && !latest.is_empty() =>
        {
            LineKind::Row(artifact.to_string(), current.to_string(), latest.to_string())
        }
        partial => LineKind::Incomplete(partial.iter().map(|f| f.to_string()).collect()),
    }
}

/// Builds the module -> dependency report from reassembled lines
pub fn extract<'a, I>(lines: I) -> DependencyReport
where
    I: IntoIterator<Item = &'a SourceLine>,
{
    let mut report = DependencyReport::new();
    let mut state = ModuleState::NoModule;

    for line in lines {
        if !participates(&line.text) {
            continue;
        }

        match classify_line(&line.text) {
            LineKind::Header(name) => {
                tracing::debug!(line = line.number, module = %name, "module header");
                state = ModuleState::enter(&name);
            }
            LineKind::Row(artifact, current, latest) => {
                if state == ModuleState::NoModule {
                    tracing::warn!(line = line.number, %artifact, "dependency listed before any module header");
                    report.warn(ParseWarning::ModulelessDependency {
                        line: line.number,
                        artifact: artifact.clone(),
                    });
                }
                let record = DependencyRecord::new(artifact, current, latest).at_line(line.number);
                report.push(state.key(), record);
            }
            LineKind::Incomplete(fields) => {
                let content = fields.join(" | ");
                tracing::warn!(line = line.number, %content, "skipping incomplete dependency row");
                report.warn(ParseWarning::MalformedDependency {
                    line: line.number,
                    content,
                });
            }
        }
    }

    report
}
