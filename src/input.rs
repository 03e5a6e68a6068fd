//! Report input reading
//!
//! Reading is best-effort: if the stream fails part-way, the lines read so
//! far are kept and the error is handed back alongside them. Bytes that are
//! not valid UTF-8 are replaced rather than rejected, and ANSI color codes
//! (from `mvn` runs with color enabled) are stripped.

use crate::error::InputError;
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

// CSI escape sequences such as "\x1b[1;34m"
static ANSI_ESCAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap());

/// Lines read from the input, plus the error that stopped reading early
#[derive(Debug, Default)]
pub struct InputLines {
    pub lines: Vec<String>,
    pub error: Option<InputError>,
}

impl InputLines {
    /// Returns true if reading stopped because of an error
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Opens the input file, or stdin when no path is given
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, InputError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| InputError::open_error(path, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Reads every line from the reader, stopping at the first hard error
pub fn read_lines<R: BufRead>(mut reader: R) -> InputLines {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => lines.push(clean_line(&buf)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                let error = InputError::read_error(lines.len(), e);
                return InputLines {
                    lines,
                    error: Some(error),
                };
            }
        }
    }

    InputLines { lines, error: None }
}

/// Decodes a raw line, dropping the line ending and color codes
pub fn clean_line(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let text = text.trim_end_matches(['\n', '\r']);
    ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}
