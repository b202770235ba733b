//! Analysis implementations.
//!
//! Each analysis is independent: it reads the cleaned table and nothing
//! else, so any subset can run in any order.

pub mod best_rated;
pub mod genre_breakdown;
pub mod genre_satisfaction;
pub mod overview;
pub mod rating_by_year;

// Re-export for convenience
pub use best_rated::{BestRatedAnalysis, RankedMovie};
pub use genre_breakdown::{GenreBreakdown, GenreBreakdownAnalysis, GenreCount, OTHER_GENRE};
pub use genre_satisfaction::{
    GenreGrouping, GenreSatisfaction, GenreSatisfactionAnalysis, GenreSatisfactionRanking,
};
pub use overview::{DatasetOverview, OverviewAnalysis};
pub use rating_by_year::{RatingByYear, RatingByYearAnalysis, YearStats};

use std::cmp::Ordering;

/// Round to 3 decimal places
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Descending order on floats, NaN-safe
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Running sum and count of ratings
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RatingAccumulator {
    sum: f64,
    count: usize,
}

impl RatingAccumulator {
    pub(crate) fn push(&mut self, rating: f32) {
        self.sum += f64::from(rating);
        self.count += 1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Mean of the pushed ratings; 0.0 when empty
    pub(crate) fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(3.14159), 3.142);
        assert_eq!(round3(4.0), 4.0);
        assert_eq!(round3(2.0006), 2.001);
        assert_eq!(round3(-1.23449), -1.234);
    }

    #[test]
    fn test_accumulator_mean() {
        let mut acc = RatingAccumulator::default();
        assert_eq!(acc.mean(), 0.0);

        acc.push(5.0);
        acc.push(3.0);
        acc.push(3.5);
        assert_eq!(acc.count(), 3);
        assert!((acc.mean() - 11.5 / 3.0).abs() < 1e-12);
    }
}
