//! Wrapped-row reassembly
//!
//! Maven wraps long dependency rows: the artifact and its dot leader land on
//! one line and `current -> latest` on the next. A candidate line with an
//! arrow but no `...` leader is such a tail, and is joined back onto the row
//! it belongs to. The tail's slot is kept as `None` so positions still line
//! up with the filtered input.
//!
//! Tails join the nearest preceding *live* line, not the slot right before
//! them. Two tails in a row therefore both land on the same row instead of
//! the second one being stranded in the slot the first one vacated.

use crate::domain::ParseWarning;
use crate::parser::{SourceLine, ARROW, ELLIPSIS};

/// Candidate lines after reassembly
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reassembled {
    /// One slot per filtered line; `None` marks a tail merged into an earlier slot
    pub slots: Vec<Option<SourceLine>>,
    /// Tails that had nothing to join onto
    pub warnings: Vec<ParseWarning>,
}

impl Reassembled {
    /// Iterates the lines that survived reassembly
    pub fn lines(&self) -> impl Iterator<Item = &SourceLine> {
        self.slots.iter().flatten()
    }
}

/// Returns true if the line is the wrapped tail of a dependency row
pub fn is_continuation(text: &str) -> bool {
    !text.contains(ELLIPSIS) && text.contains(ARROW)
}

/// Joins continuation fragments onto the nearest preceding live line
pub fn reassemble(lines: Vec<SourceLine>) -> Reassembled {
    let mut slots: Vec<Option<SourceLine>> = Vec::with_capacity(lines.len());
    let mut warnings = Vec::new();
    let mut head: Option<usize> = None;

    for line in lines {
        if is_continuation(&line.text) {
            if let Some(target) = head.and_then(|i| slots[i].as_mut()) {
                tracing::trace!(line = line.number, into = target.number, "joining wrapped row");
                target.text.push_str(&line.text);
                slots.push(None);
                continue;
            }
            tracing::warn!(line = line.number, "continuation fragment with no row to join");
            warnings.push(ParseWarning::OrphanContinuation { line: line.number });
        }
        head = Some(slots.len());
        slots.push(Some(line));
    }

    Reassembled { slots, warnings }
}
