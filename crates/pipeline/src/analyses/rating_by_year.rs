//! Rating trends by movie release year.

use super::{RatingAccumulator, round3};
use crate::traits::Analysis;
use data_loader::{Column, MovieId, RatingsTable};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Aggregates for one release year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearStats {
    /// Mean of all ratings for movies from this year, 3 decimal places
    pub avg_rating: f64,
    /// Distinct movies from this year that were rated
    pub num_unique_movies: usize,
}

/// Release year -> stats, ascending by year
pub type RatingByYear = BTreeMap<u16, YearStats>;

/// Groups rating observations by release year.
///
/// Only rows with a year, a rating and a movie id take part; on a cleaned
/// table that is every row.
pub struct RatingByYearAnalysis;

impl Analysis for RatingByYearAnalysis {
    type Output = RatingByYear;

    fn name(&self) -> &'static str {
        "rating by year"
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::Year, Column::Rating, Column::MovieId]
    }

    fn compute(&self, table: &RatingsTable) -> RatingByYear {
        let mut years: BTreeMap<u16, (RatingAccumulator, HashSet<MovieId>)> = BTreeMap::new();

        for row in table.rows() {
            let (Some(year), Some(rating), Some(movie_id)) = (row.year, row.rating, row.movie_id)
            else {
                continue;
            };

            let (ratings, movies) = years.entry(year).or_default();
            ratings.push(rating);
            movies.insert(movie_id);
        }

        years
            .into_iter()
            .map(|(year, (ratings, movies))| {
                (
                    year,
                    YearStats {
                        avg_rating: round3(ratings.mean()),
                        num_unique_movies: movies.len(),
                    },
                )
            })
            .collect()
    }
}
