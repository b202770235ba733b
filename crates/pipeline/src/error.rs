//! Error types for the analyses.
//!
//! These errors are local: an analysis that can't run reports one and the
//! rest of the report carries on without it.

use data_loader::Column;
use serde::Serialize;
use thiserror::Error;

/// Why an analysis produced no result
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnalysisError {
    /// The table lacks columns the analysis reads
    #[error("{analysis}: column(s) not found: {}", join_columns(.missing))]
    MissingColumns {
        analysis: &'static str,
        missing: Vec<Column>,
    },
}

fn join_columns(columns: &[Column]) -> String {
    columns
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ")
}
