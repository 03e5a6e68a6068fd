//! Candidate line selection
//!
//! Keeps `[INFO]` lines and module-header lines from the raw build log and
//! strips the first `[INFO]` tag. Everything else is dropped.

use crate::parser::{SourceLine, INFO_TAG, MODULE_MARKER};

/// Returns true if the raw line is worth keeping
pub fn is_candidate(line: &str) -> bool {
    line.starts_with(INFO_TAG) || line.contains(MODULE_MARKER)
}

/// Selects candidate lines, numbering them by their physical position (1-based)
pub fn filter_lines<I, S>(lines: I) -> Vec<SourceLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.as_ref();
            is_candidate(line).then(|| SourceLine::new(index + 1, line.replacen(INFO_TAG, "", 1)))
        })
        .collect()
}
