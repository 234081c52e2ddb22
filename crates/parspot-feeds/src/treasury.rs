//! Treasury daily par-rate table normalization.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use parspot_core::{CurveBatch, CurveRow, Date, Tenor};

use crate::error::{FeedError, FeedResult};

/// Tenor columns of the daily par-rate table, in publication order.
///
/// The full header is `Date` followed by these labels; anything else is a
/// provider format change and rejected outright.
pub const STANDARD_TENOR_LABELS: [&str; 14] = [
    "1 Mo", "1.5 Month", "2 Mo", "3 Mo", "4 Mo", "6 Mo", "1 Yr", "2 Yr", "3 Yr", "5 Yr", "7 Yr",
    "10 Yr", "20 Yr", "30 Yr",
];

const DATE_COLUMN: &str = "Date";
const DATE_FORMAT: &str = "%m/%d/%Y";

/// A routine that produces a normalized batch of par-rate curve rows.
pub trait ParRateSource {
    /// Fetches and normalizes one batch of daily par-rate curves.
    ///
    /// # Errors
    ///
    /// Returns a `FeedError` when the source is unreadable or its shape
    /// does not match the expected tenor set.
    fn fetch(&self) -> FeedResult<CurveBatch>;
}

/// Par-rate source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvParRateSource {
    path: PathBuf,
}

impl CsvParRateSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParRateSource for CsvParRateSource {
    fn fetch(&self) -> FeedResult<CurveBatch> {
        let file = File::open(&self.path).map_err(|e| FeedError::Csv(csv::Error::from(e)))?;
        parse_par_rate_csv(file)
    }
}

/// Parses and normalizes a daily par-rate CSV table.
///
/// Validation and normalization happen in one pass:
///
/// 1. the header must be exactly `Date` plus [`STANDARD_TENOR_LABELS`]
/// 2. dates are `%m/%d/%Y`
/// 3. every tenor label becomes an integer day-count anchored at the
///    batch's first row date, so the whole batch shares one column set
/// 4. percentage quotes are rescaled to decimal fractions
///
/// # Errors
///
/// `FeedError::UnexpectedColumns` on a header mismatch,
/// `FeedError::InvalidDate`/`InvalidRate` on a malformed cell.
pub fn parse_par_rate_csv<R: Read>(reader: R) -> FeedResult<CurveBatch> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();
    let expected: Vec<&str> = std::iter::once(DATE_COLUMN)
        .chain(STANDARD_TENOR_LABELS)
        .collect();
    if headers != expected {
        return Err(FeedError::unexpected_columns(&expected, &headers));
    }

    let mut records: Vec<(Date, Vec<f64>)> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        let date_cell = &record[0];
        let as_of: Date = NaiveDate::parse_from_str(date_cell, DATE_FORMAT)
            .map_err(|_| FeedError::invalid_date(date_cell))?
            .into();

        let mut rates = Vec::with_capacity(STANDARD_TENOR_LABELS.len());
        for (label, cell) in STANDARD_TENOR_LABELS.iter().zip(record.iter().skip(1)) {
            let percent: f64 = cell
                .trim()
                .parse()
                .map_err(|_| FeedError::invalid_rate(*label, cell))?;
            rates.push(percent / 100.0);
        }
        records.push((as_of, rates));
    }

    let mut batch = CurveBatch::new();
    let Some(&(anchor, _)) = records.first() else {
        return Ok(batch);
    };

    // Day-counts are anchored at the first row's date so every row in the
    // batch shares the same maturity columns.
    let mut day_counts = Vec::with_capacity(STANDARD_TENOR_LABELS.len());
    for label in STANDARD_TENOR_LABELS {
        day_counts.push(Tenor::parse(label)?.day_count(anchor)?);
    }

    for (as_of, rates) in records {
        let row = CurveRow::from_points(as_of, day_counts.iter().copied().zip(rates))?;
        batch.insert(row);
    }

    Ok(batch)
}
