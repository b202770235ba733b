//! Headline numbers for the whole dataset.

use crate::traits::Analysis;
use data_loader::{Column, RatingsTable};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetOverview {
    /// Rows in the table; each row is one rating
    pub total_ratings: usize,
    pub unique_users: usize,
    pub unique_movies: usize,
    /// Lowest and highest rating, `None` for an empty table
    pub rating_range: Option<(f32, f32)>,
}

/// Totals, distinct users and movies, and the rating range.
pub struct OverviewAnalysis;

impl Analysis for OverviewAnalysis {
    type Output = DatasetOverview;

    fn name(&self) -> &'static str {
        "dataset overview"
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::UserId, Column::MovieId, Column::Rating]
    }

    fn compute(&self, table: &RatingsTable) -> DatasetOverview {
        let rows = table.rows();

        let unique_users = rows.iter().filter_map(|r| r.user_id).collect::<HashSet<_>>().len();
        let unique_movies = rows.iter().filter_map(|r| r.movie_id).collect::<HashSet<_>>().len();

        let rating_range = rows.iter().filter_map(|r| r.rating).fold(None, |range, rating| {
            Some(match range {
                None => (rating, rating),
                Some((min, max)) => (f32::min(min, rating), f32::max(max, rating)),
            })
        });

        DatasetOverview {
            total_ratings: rows.len(),
            unique_users,
            unique_movies,
            rating_range,
        }
    }
}
