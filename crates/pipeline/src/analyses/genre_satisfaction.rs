//! Which genres viewers rate highest.

use super::{RatingAccumulator, descending, round3};
use crate::traits::Analysis;
use data_loader::{Column, RatingsTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What counts as one genre group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenreGrouping {
    /// Each tag of `"Action|Drama"` is its own group; the row's full rating
    /// counts toward every tag
    #[default]
    Tags,
    /// The unsplit genre string is the group, so `"Action|Drama"` and
    /// `"Action"` are unrelated
    Combinations,
}

/// Mean rating and rating count of one genre group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreSatisfaction {
    pub genre: String,
    /// Rounded to 3 decimal places
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Genre groups ordered by mean rating, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreSatisfactionRanking {
    pub entries: Vec<GenreSatisfaction>,
}

impl GenreSatisfactionRanking {
    /// The `n` best-rated groups
    pub fn top(&self, n: usize) -> &[GenreSatisfaction] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, genre: &str) -> Option<&GenreSatisfaction> {
        self.entries.iter().find(|entry| entry.genre == genre)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Averages ratings per genre group.
///
/// ## Algorithm
/// 1. Take rows with both genres and a rating
/// 2. Expand each row into its groups (see `GenreGrouping`)
/// 3. Mean and count per group, means rounded to 3 places
/// 4. Sort by mean descending, then by name
pub struct GenreSatisfactionAnalysis {
    grouping: GenreGrouping,
}

impl GenreSatisfactionAnalysis {
    pub fn new(grouping: GenreGrouping) -> Self {
        Self { grouping }
    }
}

impl Default for GenreSatisfactionAnalysis {
    fn default() -> Self {
        Self::new(GenreGrouping::default())
    }
}

impl Analysis for GenreSatisfactionAnalysis {
    type Output = GenreSatisfactionRanking;

    fn name(&self) -> &'static str {
        "genre satisfaction"
    }

    fn required_columns(&self) -> &'static [Column] {
        &[Column::Genres, Column::Rating]
    }

    fn compute(&self, table: &RatingsTable) -> GenreSatisfactionRanking {
        let mut groups: HashMap<&str, RatingAccumulator> = HashMap::new();

        for row in table.rows() {
            let (Some(genres), Some(rating)) = (row.genres.as_deref(), row.rating) else {
                continue;
            };

            let keys: Vec<&str> = match self.grouping {
                GenreGrouping::Tags => row.genre_tags().collect(),
                GenreGrouping::Combinations => vec![genres],
            };
            for key in keys {
                groups.entry(key).or_default().push(rating);
            }
        }

        let mut entries: Vec<GenreSatisfaction> = groups
            .into_iter()
            .map(|(genre, acc)| GenreSatisfaction {
                genre: genre.to_string(),
                mean_rating: round3(acc.mean()),
                rating_count: acc.count(),
            })
            .collect();

        entries.sort_by(|a, b| {
            descending(a.mean_rating, b.mean_rating).then_with(|| a.genre.cmp(&b.genre))
        });

        GenreSatisfactionRanking { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::RatingRecord;

    fn rating(movie_id: u32, genres: &str, value: f32) -> RatingRecord {
        RatingRecord::new(1, movie_id, format!("Movie {movie_id}"), genres, value, 1999)
    }

    #[test]
    fn test_full_rating_counts_toward_each_tag() {
        let table = RatingsTable::from_records(vec![
            rating(1, "Action|Drama", 4.0),
            rating(2, "Drama", 2.0),
        ]);

        let ranking = GenreSatisfactionAnalysis::default().run(&table).unwrap();

        let action = ranking.get("Action").unwrap();
        assert_eq!(action.mean_rating, 4.0);
        assert_eq!(action.rating_count, 1);

        let drama = ranking.get("Drama").unwrap();
        assert_eq!(drama.mean_rating, 3.0);
        assert_eq!(drama.rating_count, 2);

        assert_eq!(ranking.entries[0].genre, "Action");
    }

    #[test]
    fn test_means_are_rounded() {
        let table = RatingsTable::from_records(vec![
            rating(1, "Comedy", 4.0),
            rating(2, "Comedy", 4.0),
            rating(3, "Comedy", 3.0),
        ]);

        let ranking = GenreSatisfactionAnalysis::default().run(&table).unwrap();
        assert_eq!(ranking.entries[0].mean_rating, 3.667);
    }

    #[test]
    fn test_sorted_non_increasing() {
        let table = RatingsTable::from_records(vec![
            rating(1, "Horror", 2.5),
            rating(2, "Film-Noir|Crime", 4.5),
            rating(3, "Comedy|Crime", 3.0),
            rating(4, "Documentary", 4.0),
            rating(5, "Horror|Comedy", 1.0),
        ]);

        let ranking = GenreSatisfactionAnalysis::default().run(&table).unwrap();

        assert!(
            ranking
                .entries
                .windows(2)
                .all(|pair| pair[0].mean_rating >= pair[1].mean_rating)
        );
        assert_eq!(ranking.top(2).len(), 2);
        assert_eq!(ranking.top(100).len(), ranking.entries.len());
    }

    #[test]
    fn test_tags_versus_combinations() {
        let table = RatingsTable::from_records(vec![
            rating(1, "Action|Drama", 5.0),
            rating(2, "Action", 3.0),
            rating(3, "Drama", 1.0),
        ]);

        let by_tag = GenreSatisfactionAnalysis::new(GenreGrouping::Tags)
            .run(&table)
            .unwrap();
        let by_combination = GenreSatisfactionAnalysis::new(GenreGrouping::Combinations)
            .run(&table)
            .unwrap();

        // tags: Action = (5 + 3) / 2, Drama = (5 + 1) / 2
        assert_eq!(by_tag.entries.len(), 2);
        assert_eq!(by_tag.get("Action").unwrap().mean_rating, 4.0);
        assert_eq!(by_tag.get("Drama").unwrap().mean_rating, 3.0);
        assert!(by_tag.get("Action|Drama").is_none());

        // combinations: each distinct string stands alone
        assert_eq!(by_combination.entries.len(), 3);
        assert_eq!(by_combination.get("Action|Drama").unwrap().mean_rating, 5.0);
        assert_eq!(by_combination.get("Action").unwrap().mean_rating, 3.0);
        assert_eq!(by_combination.get("Drama").unwrap().rating_count, 1);
    }

    #[test]
    fn test_requires_genres_and_rating() {
        let table = RatingsTable::with_columns(&[Column::Genres], Vec::new());
        assert!(GenreSatisfactionAnalysis::default().run(&table).is_err());

        let table = RatingsTable::with_columns(&[Column::Rating], Vec::new());
        assert!(GenreSatisfactionAnalysis::default().run(&table).is_err());
    }
}
