//! Parser for ratings CSV files.
//!
//! Expected header (any order, extra columns allowed):
//! `user_id,movie_id,title,genres,rating,year`
//!
//! Cells that are empty or hold a conventional NA marker are read as missing,
//! and so are the trailing cells a short row leaves out. A row with more
//! fields than the header, or a non-missing cell in a known numeric column must parse, otherwise the
//! whole load fails with the offending line number.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Cell values treated as missing (compared after trimming)
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell counts as a missing value
pub fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || NA_VALUES.contains(&cell)
}

/// Parse an integer cell.
///
/// Integral float text such as `"1995.0"` is accepted: exported tables
/// write integer columns that way once they have held a null.
fn parse_integral<T: TryFrom<i64>>(cell: &str) -> Option<T> {
    let cell = cell.trim();
    if let Ok(value) = cell.parse::<i64>() {
        return T::try_from(value).ok();
    }

    let value = cell.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        T::try_from(value as i64).ok()
    } else {
        None
    }
}

/// Parse a rating cell into a finite `f32`
fn parse_rating(cell: &str) -> Option<f32> {
    cell.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Store a non-missing cell into the field for `column`.
///
/// Returns the reason on failure; the caller adds file and line context.
fn set_known(row: &mut RatingRecord, column: Column, cell: &str) -> std::result::Result<(), String> {
    let invalid = || format!("Invalid {}: {:?}", column, cell);

    match column {
        Column::UserId => row.user_id = Some(parse_integral(cell).ok_or_else(invalid)?),
        Column::MovieId => row.movie_id = Some(parse_integral(cell).ok_or_else(invalid)?),
        Column::Title => row.title = Some(cell.to_string()),
        Column::Genres => row.genres = Some(cell.to_string()),
        Column::Rating => row.rating = Some(parse_rating(cell).ok_or_else(invalid)?),
        Column::Year => row.year = Some(parse_integral(cell).ok_or_else(invalid)?),
    }
    Ok(())
}

fn parse_record(
    record: &StringRecord,
    slots: &[HeaderSlot],
    extra_count: usize,
    file: &str,
    line: u64,
) -> Result<RatingRecord> {
    if record.len() > slots.len() {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("Expected {} fields, saw {}", slots.len(), record.len()),
        });
    }

    let mut row = RatingRecord {
        extra: vec![None; extra_count],
        ..Default::default()
    };

    for (cell, slot) in record.iter().zip(slots) {
        if is_missing(cell) {
            continue;
        }

        match *slot {
            HeaderSlot::Known(column) => {
                set_known(&mut row, column, cell).map_err(|reason| DataLoadError::ParseError {
                    file: file.to_string(),
                    line,
                    reason,
                })?
            }
            HeaderSlot::Extra(idx) => row.extra[idx] = Some(cell.to_string()),
        }
    }

    Ok(row)
}

/// Parse CSV content into a `RatingsTable`.
///
/// `file` is only used to label parse errors. Short rows load with their
/// missing trailing cells as `None`; rows longer than the header are rejected.
pub fn parse_ratings<R: Read>(reader: R, file: &str) -> Result<RatingsTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let slots = header_slots(&headers);
    let extra_count = slots
        .iter()
        .filter(|slot| matches!(slot, HeaderSlot::Extra(_)))
        .count();

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(parse_record(&record, &slots, extra_count, file, line)?);
    }

    Ok(RatingsTable::new(headers, rows))
}
