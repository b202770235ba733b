//! # Data Loader Crate
//!
//! This crate loads a movie ratings CSV into memory and cleans it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Column, RatingRecord, RatingsTable)
//! - **parser**: Parse CSV content and individual cells
//! - **loader**: Read a CSV file from disk
//! - **cleaning**: Drop incomplete and duplicate rows
//! - **profile**: Per-column completeness and numeric statistics
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RatingsTable;
//! use std::path::Path;
//!
//! let raw = RatingsTable::load_from_csv(Path::new("data/movie_ratings.csv"))?;
//! let cleaned = raw.remove_missing_values_and_duplicates();
//!
//! println!(
//!     "{} rows kept, {} removed",
//!     cleaned.table.len(),
//!     cleaned.rows_removed()
//! );
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod loader;
pub mod cleaning;
pub mod profile;

// Re-export commonly used types for convenience
pub use cleaning::CleaningOutcome;
pub use error::{DataLoadError, Result};
pub use profile::{ColumnProfile, NumericSummary, TableProfile};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    Column,
    RatingRecord,
    RatingsTable,
    // Genre helpers
    GENRE_DELIMITER,
    split_genres,
};
