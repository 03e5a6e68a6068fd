//! Module-grouped dependency report

use super::{DependencyRecord, ParseWarning};
use serde::{Deserialize, Serialize};

/// Dependencies reported for one build module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleReport {
    /// Module name taken from the header line
    pub name: String,
    /// Rows in input order
    pub dependencies: Vec<DependencyRecord>,
}

impl ModuleReport {
    /// Creates an empty module report
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    /// Returns true if no module header preceded these rows
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

/// Module name -> dependency list mapping, ordered by first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Modules in the order they received their first row
    ///
    /// A module is established by its first row, not by its header: a header
    /// with no rows yet does not reserve a position.
    pub modules: Vec<ModuleReport>,
    /// Diagnostics raised while building the report
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<ParseWarning>,
}

impl DependencyReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row to the named module, creating the module on first use
    pub fn push(&mut self, module: &str, record: DependencyRecord) {
        match self.modules.iter_mut().find(|m| m.name == module) {
            Some(existing) => existing.dependencies.push(record),
            None => {
                let mut report = ModuleReport::new(module);
                report.dependencies.push(record);
                self.modules.push(report);
            }
        }
    }

    /// Records a parse warning
    pub fn warn(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    /// Looks up a module by name
    pub fn module(&self, name: &str) -> Option<&ModuleReport> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Returns true if no rows were recorded
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total number of rows across all modules
    pub fn dependency_count(&self) -> usize {
        self.modules.iter().map(|m| m.dependencies.len()).sum()
    }

    /// Iterates `(module name, record)` pairs in report order
    pub fn records(&self) -> impl Iterator<Item = (&str, &DependencyRecord)> {
        self.modules
            .iter()
            .flat_map(|m| m.dependencies.iter().map(move |d| (m.name.as_str(), d)))
    }
}
