//! Aggregations over a cleaned ratings table.
//!
//! This crate provides:
//! - The Analysis trait and the shared schema guard
//! - The analyses: overview, genre breakdown, genre satisfaction,
//!   rating by year, best-rated movies
//! - AnalysisPipeline for running all of them with one configuration
//!
//! ## Architecture
//! Each analysis is a stateless transform of the table:
//! 1. The schema guard checks the columns the analysis reads
//! 2. The analysis groups and aggregates rows
//! 3. The output goes to the presentation layer as plain data
//!
//! A failing guard turns into an `AnalysisError` for that section only.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{AnalysisConfig, AnalysisPipeline};
//! use pipeline::analyses::*;
//!
//! // One analysis on its own
//! let breakdown = GenreBreakdownAnalysis::new(50).run(&table)?;
//!
//! // Or the whole report
//! let report = AnalysisPipeline::new(AnalysisConfig::default()).run(&table);
//! ```

pub mod traits;
pub mod error;
pub mod analyses;
pub mod analysis_pipeline;

// Re-export main types
pub use traits::{Analysis, require_columns};
pub use error::AnalysisError;
pub use analysis_pipeline::{AnalysisConfig, AnalysisPipeline, AnalysisReport};
