//! Removing incomplete and duplicate rows.

use crate::types::RatingsTable;
use std::collections::HashSet;
use tracing::info;

/// Result of cleaning a table
#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    /// The cleaned table
    pub table: RatingsTable,
    /// Rows dropped because a present column was missing
    pub missing_removed: usize,
    /// Rows dropped as exact repeats of an earlier row
    pub duplicates_removed: usize,
}

impl CleaningOutcome {
    /// Total rows removed; always `initial rows - cleaned rows`
    pub fn rows_removed(&self) -> usize {
        self.missing_removed + self.duplicates_removed
    }
}

impl RatingsTable {
    /// Drop rows with any missing value, then collapse exact duplicates.
    ///
    /// The first occurrence of a duplicated row is kept and row order is
    /// otherwise preserved. Applying this twice gives the same table as
    /// applying it once.
    pub fn remove_missing_values_and_duplicates(&self) -> CleaningOutcome {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(self.len());
        let mut missing_removed = 0;
        let mut duplicates_removed = 0;

        for row in self.rows() {
            if !self.is_complete(row) {
                missing_removed += 1;
            } else if !seen.insert(row) {
                duplicates_removed += 1;
            } else {
                kept.push(row.clone());
            }
        }

        let outcome = CleaningOutcome {
            table: self.with_rows(kept),
            missing_removed,
            duplicates_removed,
        };

        info!(
            "Removed {} rows with missing values or duplicates ({} incomplete, {} duplicate)",
            outcome.rows_removed(),
            missing_removed,
            duplicates_removed
        );
        outcome
    }
}
