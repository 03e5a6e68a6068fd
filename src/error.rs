//! Application error types using thiserror
//!
//! Error hierarchy:
//! - InputError: Issues reading the report input
//! - ConfigError: Issues with the configuration file or CLI options
//! - RenderError: Issues producing or writing the output document
//! - MinifyError: Issues compacting HTML (recoverable, output falls back)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Input related errors
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rendering and output related errors
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to reading the report input
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file could not be opened
    #[error("failed to open input file {path}: {source}")]
    OpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped part-way through the stream
    #[error("failed to read input after {lines_read} lines: {source}")]
    ReadError {
        lines_read: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this tool
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Errors related to producing the output document
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing to the output stream failed
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("failed to create output file {path}: {source}")]
    CreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors raised by the HTML minifier
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MinifyError {
    /// The minified document is not valid UTF-8
    #[error("minified output is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::io::Error> for RenderError {
    fn from(source: std::io::Error) -> Self {
        RenderError::WriteError { source }
    }
}

impl InputError {
    /// Creates a new OpenError
    pub fn open_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::OpenError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ReadError
    pub fn read_error(lines_read: usize, source: std::io::Error) -> Self {
        InputError::ReadError { lines_read, source }
    }
}

impl ConfigError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RenderError {
    /// Creates a new CreateError
    pub fn create_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::CreateError {
            path: path.into(),
            source,
        }
    }
}
