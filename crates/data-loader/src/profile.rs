//! Column-level summary of a table: what's there, what's missing, and
//! descriptive statistics for the numeric columns.

use crate::types::{header_slots, Column, HeaderSlot, RatingRecord, RatingsTable};
use serde::Serialize;

/// Non-null and missing counts for one header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub non_null: usize,
    pub missing: usize,
}

/// Descriptive statistics over the non-missing values of a numeric column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub column: Column,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation, `None` below two values
    pub std: Option<f64>,
    pub min: Option<f64>,
    /// 25th percentile, linearly interpolated
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Percentile `p` (0..=1) of sorted values, interpolating between neighbours
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

impl NumericSummary {
    fn from_values(column: Column, values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                column,
                count,
                mean: None,
                std: None,
                min: None,
                q25: None,
                median: None,
                q75: None,
                max: None,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let std = (count > 1).then(|| {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
            variance.sqrt()
        });
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            column,
            count,
            mean: Some(mean),
            std,
            min: Some(sorted[0]),
            q25: Some(quantile(&sorted, 0.25)),
            median: Some(quantile(&sorted, 0.5)),
            q75: Some(quantile(&sorted, 0.75)),
            max: Some(sorted[count - 1]),
        }
    }
}

/// Overview of a table's shape and completeness
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableProfile {
    pub row_count: usize,
    /// One entry per header, in header order
    pub columns: Vec<ColumnProfile>,
    /// One entry per present numeric column
    pub numeric: Vec<NumericSummary>,
}

fn slot_has_value(row: &RatingRecord, slot: HeaderSlot) -> bool {
    match slot {
        HeaderSlot::Known(column) => row.has_value(column),
        HeaderSlot::Extra(idx) => row.extra.get(idx).is_some_and(Option::is_some),
    }
}

fn numeric_value(row: &RatingRecord, column: Column) -> Option<f64> {
    match column {
        Column::UserId => row.user_id.map(f64::from),
        Column::MovieId => row.movie_id.map(f64::from),
        Column::Rating => row.rating.map(f64::from),
        Column::Year => row.year.map(f64::from),
        Column::Title | Column::Genres => None,
    }
}

fn is_numeric(column: Column) -> bool {
    !matches!(column, Column::Title | Column::Genres)
}

impl RatingsTable {
    /// Summarise the table column by column.
    pub fn profile(&self) -> TableProfile {
        let columns = self
            .headers()
            .iter()
            .zip(header_slots(self.headers()))
            .map(|(name, slot)| {
                let non_null = self.rows().iter().filter(|row| slot_has_value(row, slot)).count();
                ColumnProfile {
                    name: name.clone(),
                    non_null,
                    missing: self.len() - non_null,
                }
            })
            .collect();

        let numeric = self
            .columns()
            .iter()
            .copied()
            .filter(|&column| is_numeric(column))
            .map(|column| {
                let values: Vec<f64> = self
                    .rows()
                    .iter()
                    .filter_map(|row| numeric_value(row, column))
                    .collect();
                NumericSummary::from_values(column, &values)
            })
            .collect();

        TableProfile {
            row_count: self.len(),
            columns,
            numeric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_counts_missing_cells() {
        let mut partial = RatingRecord::new(2, 6, "Heat (1995)", "Action", 3.0, 1995);
        partial.genres = None;
        partial.year = None;

        let table = RatingsTable::from_records(vec![
            RatingRecord::new(1, 6, "Heat (1995)", "Action", 5.0, 1995),
            partial,
        ]);
        let profile = table.profile();

        assert_eq!(profile.row_count, 2);
        assert_eq!(profile.columns.len(), 6);

        let genres = profile.columns.iter().find(|c| c.name == "genres").unwrap();
        assert_eq!(genres.non_null, 1);
        assert_eq!(genres.missing, 1);

        let rating = profile.numeric.iter().find(|s| s.column == Column::Rating).unwrap();
        assert_eq!(rating.count, 2);
        assert_eq!(rating.mean, Some(4.0));
        assert_eq!(rating.min, Some(3.0));
        assert_eq!(rating.max, Some(5.0));
        assert_eq!(rating.q25, Some(3.5));
        assert_eq!(rating.median, Some(4.0));
        assert_eq!(rating.q75, Some(4.5));
        let std = rating.std.unwrap();
        assert!((std - 2.0_f64.sqrt()).abs() < 1e-9);

        let year = profile.numeric.iter().find(|s| s.column == Column::Year).unwrap();
        assert_eq!(year.count, 1);
        assert_eq!(year.std, None);
    }

    #[test]
    fn test_profile_skips_text_and_absent_columns() {
        let table = RatingsTable::with_columns(&[Column::Title, Column::Rating], Vec::new());
        let profile = table.profile();

        assert_eq!(profile.numeric.len(), 1);
        assert_eq!(profile.numeric[0].column, Column::Rating);
        assert_eq!(profile.numeric[0].mean, None);
        assert_eq!(profile.numeric[0].median, None);
    }

    #[test]
    fn test_quartiles_interpolate() {
        let summary = NumericSummary::from_values(Column::Rating, &[4.0, 1.0, 3.0, 2.0, 5.0]);
        assert_eq!(summary.min, Some(1.0));
        assert_eq!(summary.q25, Some(2.0));
        assert_eq!(summary.median, Some(3.0));
        assert_eq!(summary.q75, Some(4.0));
        assert_eq!(summary.max, Some(5.0));

        let summary = NumericSummary::from_values(Column::Year, &[1990.0, 1995.0, 2000.0, 2010.0]);
        assert_eq!(summary.q25, Some(1993.75));
        assert_eq!(summary.median, Some(1997.5));
        assert_eq!(summary.q75, Some(2002.5));
    }
}
