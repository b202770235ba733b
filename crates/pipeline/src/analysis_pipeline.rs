//! The AnalysisPipeline runs every analysis over one cleaned table.
//!
//! Sections are independent: a missing column fails only the sections that
//! need it, and the report still carries everything else.

use crate::analyses::*;
use crate::error::AnalysisError;
use crate::traits::Analysis;
use data_loader::RatingsTable;
use serde::{Deserialize, Serialize};

/// Parameters passed through from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Genres with fewer movies are folded into "Other"
    pub min_threshold: usize,
    /// How many best-rated movies to list
    pub top_n: usize,
    /// Ratings a title needs to enter the best-rated list
    pub min_ratings: usize,
    /// Ratings a title needs to enter the second, "established" list
    pub established_min_ratings: usize,
    /// How genre satisfaction groups genres
    pub grouping: GenreGrouping,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_threshold: 50,
            top_n: 5,
            min_ratings: 50,
            established_min_ratings: 150,
            grouping: GenreGrouping::Tags,
        }
    }
}

/// Everything the presentation layer renders.
///
/// Each section is either its aggregate or the reason it couldn't be built.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub config: AnalysisConfig,
    pub overview: Result<DatasetOverview, AnalysisError>,
    pub genre_breakdown: Result<GenreBreakdown, AnalysisError>,
    pub genre_satisfaction: Result<GenreSatisfactionRanking, AnalysisError>,
    pub rating_by_year: Result<RatingByYear, AnalysisError>,
    /// Top `top_n` among titles with at least `min_ratings` ratings
    pub best_rated: Result<Vec<RankedMovie>, AnalysisError>,
    /// Top `top_n` among titles with at least `established_min_ratings` ratings
    pub best_rated_established: Result<Vec<RankedMovie>, AnalysisError>,
}

impl AnalysisReport {
    /// Errors of the sections that couldn't be built, in section order
    pub fn failures(&self) -> Vec<&AnalysisError> {
        [
            self.overview.as_ref().err(),
            self.genre_breakdown.as_ref().err(),
            self.genre_satisfaction.as_ref().err(),
            self.rating_by_year.as_ref().err(),
            self.best_rated.as_ref().err(),
            self.best_rated_established.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Runs all analyses with one configuration.
///
/// ## Usage
/// ```ignore
/// let report = AnalysisPipeline::new(AnalysisConfig::default())
///     .with_min_threshold(100)
///     .with_top_n(10)
///     .run(&cleaned.table);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisPipeline {
    config: AnalysisConfig,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn with_min_threshold(mut self, min_threshold: usize) -> Self {
        self.config.min_threshold = min_threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    pub fn with_min_ratings(mut self, min_ratings: usize) -> Self {
        self.config.min_ratings = min_ratings;
        self
    }

    pub fn with_established_min_ratings(mut self, min_ratings: usize) -> Self {
        self.config.established_min_ratings = min_ratings;
        self
    }

    pub fn with_grouping(mut self, grouping: GenreGrouping) -> Self {
        self.config.grouping = grouping;
        self
    }

    /// Run every analysis over `table`.
    ///
    /// Never fails as a whole; per-section failures are logged and kept in
    /// the report.
    pub fn run(&self, table: &RatingsTable) -> AnalysisReport {
        let config = self.config;

        AnalysisReport {
            config,
            overview: run_section(&OverviewAnalysis, table),
            genre_breakdown: run_section(&GenreBreakdownAnalysis::new(config.min_threshold), table),
            genre_satisfaction: run_section(&GenreSatisfactionAnalysis::new(config.grouping), table),
            rating_by_year: run_section(&RatingByYearAnalysis, table),
            best_rated: run_section(&BestRatedAnalysis::new(config.top_n, config.min_ratings), table),
            best_rated_established: run_section(
                &BestRatedAnalysis::new(config.top_n, config.established_min_ratings),
                table,
            ),
        }
    }
}

/// Run one analysis, logging what happened
fn run_section<A: Analysis>(
    analysis: &A,
    table: &RatingsTable,
) -> Result<A::Output, AnalysisError> {
    tracing::debug!(
        "Running analysis: {} (input rows: {})",
        analysis.name(),
        table.len()
    );

    let result = analysis.run(table);
    if let Err(err) = &result {
        tracing::warn!("Skipping {}: {}", analysis.name(), err);
    }
    result
}
