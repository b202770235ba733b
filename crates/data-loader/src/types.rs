//! Core domain types for the ratings table.
//!
//! The table keeps every cell of the CSV: the six known columns are typed,
//! anything else is kept verbatim in `RatingRecord::extra` so that cleaning
//! sees the whole row.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a user
pub type UserId = u32;

/// Unique identifier for a movie
pub type MovieId = u32;

/// Separator between genre tags in the `genres` column
pub const GENRE_DELIMITER: char = '|';

/// Split a delimited genre string into its tags.
///
/// Empty segments (`"Action||Drama"`, a trailing `|`) are dropped.
pub fn split_genres(genres: &str) -> impl Iterator<Item = &str> {
    genres.split(GENRE_DELIMITER).filter(|tag| !tag.is_empty())
}

// =============================================================================
// Columns
// =============================================================================

/// The columns the analyses know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    UserId,
    MovieId,
    Title,
    Genres,
    Rating,
    Year,
}

impl Column {
    /// All known columns in their canonical order
    pub const ALL: [Column; 6] = [
        Column::UserId,
        Column::MovieId,
        Column::Title,
        Column::Genres,
        Column::Rating,
        Column::Year,
    ];

    /// Header name of this column in the CSV
    pub fn name(self) -> &'static str {
        match self {
            Column::UserId => "user_id",
            Column::MovieId => "movie_id",
            Column::Title => "title",
            Column::Genres => "genres",
            Column::Rating => "rating",
            Column::Year => "year",
        }
    }

    /// Match a CSV header against the known columns (whitespace-trimmed, exact case)
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Column::ALL.into_iter().find(|column| column.name() == header)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the cells under one header end up in a `RatingRecord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderSlot {
    Known(Column),
    /// Index into `RatingRecord::extra`
    Extra(usize),
}

/// Map each header to its slot.
///
/// Only the first header naming a known column is bound to it; repeats are
/// kept as extra columns.
pub(crate) fn header_slots(headers: &[String]) -> Vec<HeaderSlot> {
    let mut seen = HashSet::new();
    let mut extra = 0;

    headers
        .iter()
        .map(|header| match Column::from_header(header) {
            Some(column) if seen.insert(column) => HeaderSlot::Known(column),
            _ => {
                extra += 1;
                HeaderSlot::Extra(extra - 1)
            }
        })
        .collect()
}

// =============================================================================
// Records
// =============================================================================

/// One row of the ratings table: a single (user, movie, rating) observation.
///
/// `None` means either a missing cell or a column the file doesn't have;
/// `RatingsTable` knows which columns are present and tells the two apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: Option<UserId>,
    pub movie_id: Option<MovieId>,
    pub title: Option<String>,
    pub genres: Option<String>,
    /// Rating value, usually 0.5 to 5.0
    pub rating: Option<f32>,
    /// Release year of the movie
    pub year: Option<u16>,
    /// Cells of unrecognised columns, in header order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Option<String>>,
}

impl RatingRecord {
    /// Build a record with every known field set.
    pub fn new(
        user_id: UserId,
        movie_id: MovieId,
        title: impl Into<String>,
        genres: impl Into<String>,
        rating: f32,
        year: u16,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            movie_id: Some(movie_id),
            title: Some(title.into()),
            genres: Some(genres.into()),
            rating: Some(rating),
            year: Some(year),
            extra: Vec::new(),
        }
    }

    /// Whether the record holds a value for `column`
    pub fn has_value(&self, column: Column) -> bool {
        match column {
            Column::UserId => self.user_id.is_some(),
            Column::MovieId => self.movie_id.is_some(),
            Column::Title => self.title.is_some(),
            Column::Genres => self.genres.is_some(),
            Column::Rating => self.rating.is_some(),
            Column::Year => self.year.is_some(),
        }
    }

    /// The value for `column` as text, `None` if missing
    pub fn value_string(&self, column: Column) -> Option<String> {
        match column {
            Column::UserId => self.user_id.map(|v| v.to_string()),
            Column::MovieId => self.movie_id.map(|v| v.to_string()),
            Column::Title => self.title.clone(),
            Column::Genres => self.genres.clone(),
            Column::Rating => self.rating.map(|v| v.to_string()),
            Column::Year => self.year.map(|v| v.to_string()),
        }
    }

    /// Genre tags of this record, empty if `genres` is missing
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genres.as_deref().into_iter().flat_map(|genres| split_genres(genres))
    }
}

// Ratings compare bitwise so that equality and hashing agree; this is what
// "exact duplicate row" means for cleaning.
impl PartialEq for RatingRecord {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.movie_id == other.movie_id
            && self.title == other.title
            && self.genres == other.genres
            && self.rating.map(f32::to_bits) == other.rating.map(f32::to_bits)
            && self.year == other.year
            && self.extra == other.extra
    }
}

impl Eq for RatingRecord {}

impl Hash for RatingRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
        self.movie_id.hash(state);
        self.title.hash(state);
        self.genres.hash(state);
        self.rating.map(f32::to_bits).hash(state);
        self.year.hash(state);
        self.extra.hash(state);
    }
}

// =============================================================================
// RatingsTable
// =============================================================================

/// The in-memory ratings table.
///
/// Loaded once, cleaned once, then only read. Analyses borrow it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RatingsTable {
    headers: Vec<String>,
    /// Known columns present in the header, in header order
    columns: Vec<Column>,
    rows: Vec<RatingRecord>,
}

impl RatingsTable {
    /// Create a table from raw headers and already-parsed rows.
    pub fn new(headers: Vec<String>, rows: Vec<RatingRecord>) -> Self {
        let columns = header_slots(&headers)
            .into_iter()
            .filter_map(|slot| match slot {
                HeaderSlot::Known(column) => Some(column),
                HeaderSlot::Extra(_) => None,
            })
            .collect();

        Self {
            headers,
            columns,
            rows,
        }
    }

    /// Create a table whose header is exactly `columns`.
    pub fn with_columns(columns: &[Column], rows: Vec<RatingRecord>) -> Self {
        let headers = columns.iter().map(|c| c.name().to_string()).collect();
        Self::new(headers, rows)
    }

    /// Create a table with all six known columns.
    pub fn from_records(rows: Vec<RatingRecord>) -> Self {
        Self::with_columns(&Column::ALL, rows)
    }

    /// Same header, different rows
    pub(crate) fn with_rows(&self, rows: Vec<RatingRecord>) -> Self {
        Self {
            headers: self.headers.clone(),
            columns: self.columns.clone(),
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Known columns present in this table
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn rows(&self) -> &[RatingRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[RatingRecord] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Cells of `row` as text, in header order
    pub fn cells(&self, row: &RatingRecord) -> Vec<Option<String>> {
        header_slots(&self.headers)
            .into_iter()
            .map(|slot| match slot {
                HeaderSlot::Known(column) => row.value_string(column),
                HeaderSlot::Extra(idx) => row.extra.get(idx).cloned().flatten(),
            })
            .collect()
    }

    /// True when no present column of `row` is missing.
    pub fn is_complete(&self, row: &RatingRecord) -> bool {
        self.columns.iter().all(|&column| row.has_value(column))
            && row.extra.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_from_header() {
        assert_eq!(Column::from_header("genres"), Some(Column::Genres));
        assert_eq!(Column::from_header(" rating "), Some(Column::Rating));
        assert_eq!(Column::from_header("Rating"), None);
        assert_eq!(Column::from_header("timestamp"), None);
    }

    #[test]
    fn test_header_slots_repeats_become_extra() {
        let headers: Vec<String> = ["rating", "timestamp", "rating"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            header_slots(&headers),
            vec![
                HeaderSlot::Known(Column::Rating),
                HeaderSlot::Extra(0),
                HeaderSlot::Extra(1),
            ]
        );
    }

    #[test]
    fn test_split_genres() {
        let tags: Vec<&str> = split_genres("Action|Comedy").collect();
        assert_eq!(tags, vec!["Action", "Comedy"]);

        let tags: Vec<&str> = split_genres("Action||Drama|").collect();
        assert_eq!(tags, vec!["Action", "Drama"]);
    }

    #[test]
    fn test_record_equality_is_bitwise_on_rating() {
        let a = RatingRecord::new(1, 10, "Heat (1995)", "Action|Crime", 4.5, 1995);
        let b = a.clone();
        let mut c = a.clone();
        c.rating = Some(4.0);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<&RatingRecord> = [&a, &b, &c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_table_columns_and_completeness() {
        let table = RatingsTable::with_columns(
            &[Column::Title, Column::Rating],
            vec![
                RatingRecord {
                    title: Some("Heat".to_string()),
                    rating: Some(4.0),
                    ..Default::default()
                },
                RatingRecord {
                    title: Some("Ronin".to_string()),
                    ..Default::default()
                },
            ],
        );

        assert!(table.has_column(Column::Title));
        assert!(!table.has_column(Column::Genres));
        // absent columns don't make a row incomplete
        assert!(table.is_complete(&table.rows()[0]));
        assert!(!table.is_complete(&table.rows()[1]));
        assert_eq!(table.head(10).len(), 2);
        assert_eq!(table.head(1).len(), 1);
    }

    #[test]
    fn test_cells_follow_header_order() {
        let headers: Vec<String> = ["rating", "note", "title"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let row = RatingRecord {
            title: Some("Heat".to_string()),
            rating: Some(4.5),
            extra: vec![Some("rewatch".to_string())],
            ..Default::default()
        };
        let table = RatingsTable::new(headers, vec![row]);

        assert_eq!(
            table.cells(&table.rows()[0]),
            vec![
                Some("4.5".to_string()),
                Some("rewatch".to_string()),
                Some("Heat".to_string()),
            ]
        );
    }
}
