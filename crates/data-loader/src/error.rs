//! Error types for the data-loader crate.
//!
//! Every variant here is fatal for an analysis session: there is nothing
//! sensible to analyse without a table, so callers at the process boundary
//! report the error and exit.

use thiserror::Error;

/// Errors that can occur while loading a ratings CSV.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The file does not exist
    #[error("File '{path}' not found")]
    FileNotFound { path: String },

    /// The file exists but holds no content at all, not even a header row
    #[error("File '{path}' is empty")]
    EmptyFile { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed CSV (unterminated quotes, invalid UTF-8, ...)
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A cell in a known column couldn't be converted to its column type
    ///
    /// `line` is the 1-based line in the file, header included.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
