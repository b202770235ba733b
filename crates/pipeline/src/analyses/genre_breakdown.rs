//! How many movies fall under each genre.
//!
//! Counts are per movie, not per rating: the table is first reduced to one
//! row per `(movie_id, title, genres)`.

use crate::traits::Analysis;
use data_loader::{Column, MovieId, RatingsTable, split_genres};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Label of the bucket holding all genres below the threshold
pub const OTHER_GENRE: &str = "Other";

/// Number of movies tagged with one genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub movies: usize,
}

/// Movies per genre, most common first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreBreakdown {
    pub entries: Vec<GenreCount>,
    /// Distinct movies in the table, the base for percentages
    pub unique_movies: usize,
}

impl GenreBreakdown {
    /// Count for `genre`, if it has an entry
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.genre == genre)
            .map(|entry| entry.movies)
    }

    /// Sum of all counts, i.e. the number of (movie, genre tag) pairs
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.movies).sum()
    }

    /// Share of unique movies tagged with this entry's genre, in percent
    pub fn percentage(&self, entry: &GenreCount) -> f64 {
        if self.unique_movies == 0 {
            0.0
        } else {
            entry.movies as f64 / self.unique_movies as f64 * 100.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counts movies per genre tag, folding rare genres into "Other".
///
/// ## Algorithm
/// 1. Reduce to distinct `(movie_id, title, genres)`
/// 2. Split each `genres` on `|`; a movie with K tags adds 1 to K genres
/// 3. Genres with fewer than `min_threshold` movies are summed into "Other"
/// 4. Sort by count descending, then by name
pub struct GenreBreakdownAnalysis {
    min_threshold: usize,
}

impl GenreBreakdownAnalysis {
    /// Create a new GenreBreakdownAnalysis.
    ///
    /// # Arguments
    /// * `min_threshold` - Genres with strictly fewer movies are folded into "Other"
    pub fn new(min_threshold: usize) -> Self {
        Self { min_threshold }
    }
}

impl Analysis for GenreBreakdownAnalysis {
    type Output = GenreBreakdown;

    fn name(&self) -> &'static str {
        "genre breakdown"
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::Genres]
    }

    fn compute(&self, table: &RatingsTable) -> GenreBreakdown {
        let movies: HashSet<(Option<MovieId>, Option<&str>, Option<&str>)> = table
            .rows()
            .iter()
            .map(|row| (row.movie_id, row.title.as_deref(), row.genres.as_deref()))
            .collect();

        let unique_movies = if table.has_column(Column::MovieId) {
            movies
                .iter()
                .filter_map(|(movie_id, _, _)| *movie_id)
                .collect::<HashSet<_>>()
                .len()
        } else {
            movies.len()
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for genres in movies.iter().filter_map(|(_, _, genres)| *genres) {
            for tag in split_genres(genres) {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }

        let (kept, folded): (Vec<_>, Vec<_>) = counts
            .into_iter()
            .partition(|&(_, count)| count >= self.min_threshold);

        let mut entries: Vec<GenreCount> = kept
            .into_iter()
            .map(|(genre, movies)| GenreCount {
                genre: genre.to_string(),
                movies,
            })
            .collect();

        if !folded.is_empty() {
            let other: usize = folded.iter().map(|&(_, count)| count).sum();
            // A real genre literally called "Other" shares the bucket
            match entries.iter_mut().find(|entry| entry.genre == OTHER_GENRE) {
                Some(entry) => entry.movies += other,
                None => entries.push(GenreCount {
                    genre: OTHER_GENRE.to_string(),
                    movies: other,
                }),
            }
        }

        entries.sort_by(|a, b| b.movies.cmp(&a.movies).then_with(|| a.genre.cmp(&b.genre)));

        GenreBreakdown {
            entries,
            unique_movies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::RatingRecord;

    fn movie(user_id: u32, movie_id: u32, title: &str, genres: &str) -> RatingRecord {
        RatingRecord::new(user_id, movie_id, title, genres, 4.0, 2000)
    }

    #[test]
    fn test_three_movie_scenario() {
        let table = RatingsTable::from_records(vec![
            movie(1, 1, "A", "Sci-Fi|Action"),
            movie(1, 2, "B", "Action"),
            movie(1, 3, "C", "Comedy"),
        ]);

        let breakdown = GenreBreakdownAnalysis::new(2).run(&table).unwrap();

        assert_eq!(
            breakdown.entries,
            vec![
                GenreCount { genre: "Action".to_string(), movies: 2 },
                GenreCount { genre: "Other".to_string(), movies: 2 },
            ]
        );
        assert_eq!(breakdown.unique_movies, 3);
    }

    #[test]
    fn test_literal_other_genre_absorbs_folded_count() {
        let table = RatingsTable::from_records(vec![
            movie(1, 1, "A", "Other"),
            movie(1, 2, "B", "Other|War"),
            movie(1, 3, "C", "Drama"),
        ]);

        let breakdown = GenreBreakdownAnalysis::new(2).run(&table).unwrap();

        assert_eq!(
            breakdown.entries,
            vec![GenreCount { genre: OTHER_GENRE.to_string(), movies: 4 }]
        );
    }

    #[test]
    fn test_counts_movies_not_ratings() {
        let table = RatingsTable::from_records(vec![
            movie(1, 1, "A", "Drama"),
            movie(2, 1, "A", "Drama"),
            movie(3, 1, "A", "Drama"),
            movie(1, 2, "B", "Drama|Romance"),
        ]);

        let breakdown = GenreBreakdownAnalysis::new(1).run(&table).unwrap();

        assert_eq!(breakdown.get("Drama"), Some(2));
        assert_eq!(breakdown.get("Romance"), Some(1));
        assert_eq!(breakdown.get(OTHER_GENRE), None);
        assert_eq!(breakdown.unique_movies, 2);
        assert_eq!(breakdown.percentage(&breakdown.entries[0]), 100.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let table = RatingsTable::from_records(vec![
            movie(1, 1, "A", "Horror"),
            movie(1, 2, "B", "Horror"),
            movie(1, 3, "C", "War"),
        ]);

        let breakdown = GenreBreakdownAnalysis::new(2).run(&table).unwrap();

        // exactly at the threshold stays
        assert_eq!(breakdown.get("Horror"), Some(2));
        assert_eq!(breakdown.get("War"), None);
        assert_eq!(breakdown.get(OTHER_GENRE), Some(1));
    }

    #[test]
    fn test_no_other_when_nothing_folds() {
        let table = RatingsTable::from_records(vec![movie(1, 1, "A", "Western")]);
        let breakdown = GenreBreakdownAnalysis::new(1).run(&table).unwrap();

        assert_eq!(breakdown.entries.len(), 1);
        assert_eq!(breakdown.get(OTHER_GENRE), None);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let table = RatingsTable::from_records(vec![
            movie(1, 1, "A", "Western"),
            movie(1, 2, "B", "Crime"),
            movie(1, 3, "C", "Musical"),
        ]);
        let breakdown = GenreBreakdownAnalysis::new(1).run(&table).unwrap();

        let names: Vec<&str> = breakdown.entries.iter().map(|e| e.genre.as_str()).collect();
        assert_eq!(names, vec!["Crime", "Musical", "Western"]);
    }

    #[test]
    fn test_missing_genres_column() {
        let table = RatingsTable::with_columns(&[Column::MovieId, Column::Title], Vec::new());
        assert!(GenreBreakdownAnalysis::new(1).run(&table).is_err());
    }
}
