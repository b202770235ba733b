//! The best-rated movies by mean rating.

use super::{RatingAccumulator, descending};
use crate::traits::Analysis;
use data_loader::{Column, RatingsTable};
use serde::Serialize;
use std::collections::HashMap;

/// One movie in the best-rated list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMovie {
    pub title: String,
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Ranks titles by mean rating.
///
/// Two knobs, deliberately separate:
/// - `top_n` caps how many movies are returned
/// - `min_ratings` is how many ratings a title needs before it qualifies
///
/// Equal means are ordered by title so the output is reproducible.
pub struct BestRatedAnalysis {
    top_n: usize,
    min_ratings: usize,
}

impl BestRatedAnalysis {
    /// Create a new BestRatedAnalysis.
    ///
    /// # Arguments
    /// * `top_n` - Maximum number of movies to return
    /// * `min_ratings` - Minimum number of ratings a title needs (1 or 0 keeps all)
    pub fn new(top_n: usize, min_ratings: usize) -> Self {
        Self { top_n, min_ratings }
    }
}

impl Analysis for BestRatedAnalysis {
    type Output = Vec<RankedMovie>;

    fn name(&self) -> &'static str {
        "best rated movies"
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::Rating, Column::Title]
    }

    fn compute(&self, table: &RatingsTable) -> Vec<RankedMovie> {
        let mut titles: HashMap<&str, RatingAccumulator> = HashMap::new();
        for row in table.rows() {
            if let (Some(title), Some(rating)) = (row.title.as_deref(), row.rating) {
                titles.entry(title).or_default().push(rating);
            }
        }

        let mut ranked: Vec<RankedMovie> = titles
            .into_iter()
            .filter(|(_, acc)| acc.count() >= self.min_ratings)
            .map(|(title, acc)| RankedMovie {
                title: title.to_string(),
                mean_rating: acc.mean(),
                rating_count: acc.count(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            descending(a.mean_rating, b.mean_rating).then_with(|| a.title.cmp(&b.title))
        });
        ranked.truncate(self.top_n);
        ranked
    }
}
