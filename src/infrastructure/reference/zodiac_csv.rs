//! Zodiac reference table loaded from CSV.
//!
//! Expected header: `sign,start_month,start_day,end_month,end_day`.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::domain::calendar::CalendarError;
use crate::domain::entities::{ZodiacRange, ZodiacTable};

/// Errors raised while loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} ({sign}): {source}")]
    InvalidRow {
        row: usize,
        sign: String,
        #[source]
        source: CalendarError,
    },

    #[error("zodiac table is empty")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ZodiacRow {
    sign: String,
    start_month: u32,
    start_day: u32,
    end_month: u32,
    end_day: u32,
}

/// Parses a zodiac table from any CSV reader, keeping row order.
///
/// # Errors
///
/// Returns [`ReferenceDataError::Csv`] for malformed records,
/// [`ReferenceDataError::InvalidRow`] for impossible dates and
/// [`ReferenceDataError::Empty`] if the table has no rows.
pub fn parse_zodiac_csv<R: Read>(reader: R) -> Result<ZodiacTable, ReferenceDataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut ranges = Vec::new();
    for (index, record) in csv_reader.deserialize::<ZodiacRow>().enumerate() {
        let row = record?;
        let range = ZodiacRange::new(
            row.sign.clone(),
            (row.start_month, row.start_day),
            (row.end_month, row.end_day),
        )
        .map_err(|source| ReferenceDataError::InvalidRow {
            row: index + 1,
            sign: row.sign,
            source,
        })?;
        ranges.push(range);
    }

    if ranges.is_empty() {
        return Err(ReferenceDataError::Empty);
    }

    Ok(ZodiacTable::new(ranges))
}

/// Loads the zodiac table from a CSV file.
///
/// # Errors
///
/// Returns [`ReferenceDataError::Io`] if the file cannot be opened, otherwise
/// the errors of [`parse_zodiac_csv`].
pub fn load_zodiac_table(path: impl AsRef<Path>) -> Result<ZodiacTable, ReferenceDataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReferenceDataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = parse_zodiac_csv(file)?;
    info!(path = %path.display(), signs = table.len(), "Loaded zodiac table");
    Ok(table)
}
