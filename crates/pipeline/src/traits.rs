//! Core trait for the analyses.
//!
//! Every analysis declares the columns it reads; the shared schema guard
//! checks them before any computation happens.

use crate::error::AnalysisError;
use data_loader::{Column, RatingsTable};

/// Check that `table` has every column in `required`.
///
/// All missing columns are reported at once, in the order given.
pub fn require_columns(
    analysis: &'static str,
    table: &RatingsTable,
    required: &[Column],
) -> Result<(), AnalysisError> {
    let missing: Vec<Column> = required
        .iter()
        .copied()
        .filter(|&column| !table.has_column(column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::MissingColumns { analysis, missing })
    }
}

/// A stateless aggregate over a cleaned ratings table.
///
/// ## Design Note
/// - `compute` may assume the required columns exist; callers go through `run`
/// - Analyses borrow the table and never modify it
/// - An empty table yields an empty output, never an error
pub trait Analysis {
    /// What this analysis produces
    type Output;

    /// Returns the name of this analysis (for logging and error messages)
    fn name(&self) -> &'static str;

    /// Columns that must be present in the table
    fn required_columns(&self) -> &'static [Column];

    /// Compute the aggregate. The schema has already been checked.
    fn compute(&self, table: &RatingsTable) -> Self::Output;

    /// Check the schema, then compute.
    ///
    /// # Returns
    /// * `Ok(Output)` - The aggregate
    /// * `Err(AnalysisError::MissingColumns)` - If a required column is absent
    fn run(&self, table: &RatingsTable) -> Result<Self::Output, AnalysisError> {
        require_columns(self.name(), table, self.required_columns())?;
        Ok(self.compute(table))
    }
}
