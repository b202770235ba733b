//! Loading a `RatingsTable` from disk.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::RatingsTable;
use std::fs;
use std::path::Path;
use tracing::info;

impl RatingsTable {
    /// Load a ratings CSV from `path`.
    ///
    /// This is the main entry point for loading data.
    ///
    /// Fails with:
    /// - `FileNotFound` if nothing exists at `path`
    /// - `EmptyFile` if the file has no content (not even a header)
    /// - `CsvError` / `ParseError` if the content is malformed
    ///
    /// A file holding only a header row loads as an empty table.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        info!("Loading dataset from: {}", path.display());

        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let bytes = fs::read(path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(DataLoadError::EmptyFile {
                path: path.display().to_string(),
            });
        }

        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let table = parser::parse_ratings(bytes.as_slice(), &file)?;

        info!(
            "Dataset loaded: {} rows, {} columns",
            table.len(),
            table.headers().len()
        );
        Ok(table)
    }
}
