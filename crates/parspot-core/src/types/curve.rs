//! Curve rows and batches.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ParspotError, ParspotResult};
use crate::types::Date;

/// One date's full set of (maturity, rate) pairs.
///
/// Maturities are positive day-counts from the as-of date; rates are
/// decimal fractions (0.0429 means 4.29%). The same row shape carries par
/// rates, bootstrapped spot rates, and recovered yields - only the
/// interpretation of the values differs.
///
/// Backing the points with a `BTreeMap` gives both row invariants for
/// free: maturity keys are unique, and iteration is always in strictly
/// increasing maturity order, which the bootstrap recurrence relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRow {
    as_of: Date,
    points: BTreeMap<u32, f64>,
}

impl CurveRow {
    /// Creates an empty row anchored at `as_of`.
    #[must_use]
    pub fn new(as_of: Date) -> Self {
        Self {
            as_of,
            points: BTreeMap::new(),
        }
    }

    /// Creates a row from (day-count, rate) pairs.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidMaturity` on a zero day-count or a
    /// duplicate.
    pub fn from_points(
        as_of: Date,
        points: impl IntoIterator<Item = (u32, f64)>,
    ) -> ParspotResult<Self> {
        let mut row = Self::new(as_of);
        for (days, rate) in points {
            row.insert(days, rate)?;
        }
        Ok(row)
    }

    /// Inserts a maturity point.
    ///
    /// # Errors
    ///
    /// Returns `ParspotError::InvalidMaturity` if `days` is zero or
    /// already present - rows never silently overwrite a quote.
    pub fn insert(&mut self, days: u32, rate: f64) -> ParspotResult<()> {
        if days == 0 {
            return Err(ParspotError::invalid_maturity(
                days,
                "maturity must be at least one day",
            ));
        }
        if self.points.contains_key(&days) {
            return Err(ParspotError::invalid_maturity(days, "duplicate maturity"));
        }
        self.points.insert(days, rate);
        Ok(())
    }

    /// Returns the as-of date.
    #[must_use]
    pub fn as_of(&self) -> Date {
        self.as_of
    }

    /// Returns the rate at a maturity, if present.
    #[must_use]
    pub fn get(&self, days: u32) -> Option<f64> {
        self.points.get(&days).copied()
    }

    /// Iterates (day-count, rate) pairs in increasing maturity order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.points.iter().map(|(d, r)| (*d, *r))
    }

    /// Iterates the maturity day-counts in increasing order.
    pub fn maturities(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.keys().copied()
    }

    /// Number of maturity points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the row has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for CurveRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} maturities]", self.as_of, self.points.len())
    }
}

/// A batch of curve rows keyed by observation date.
///
/// Rows are fully independent of each other; the batch is just the
/// caller-owned collection the pipeline iterates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveBatch {
    rows: BTreeMap<Date, CurveRow>,
}

impl CurveBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a row, keyed by its as-of date. An existing row for the
    /// same date is replaced and returned.
    pub fn insert(&mut self, row: CurveRow) -> Option<CurveRow> {
        self.rows.insert(row.as_of(), row)
    }

    /// Returns the row for a date, if present.
    #[must_use]
    pub fn get(&self, as_of: Date) -> Option<&CurveRow> {
        self.rows.get(&as_of)
    }

    /// Iterates rows in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &CurveRow)> + '_ {
        self.rows.iter().map(|(d, r)| (*d, r))
    }

    /// The date of the earliest row, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.rows.keys().next().copied()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the batch has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> Date {
        Date::from_ymd(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_iteration_is_sorted() {
        // Insert out of order; iteration must come back shortest-first.
        let row =
            CurveRow::from_points(as_of(), [(1095, 0.041), (30, 0.043), (365, 0.042)]).unwrap();
        let days: Vec<u32> = row.maturities().collect();
        assert_eq!(days, vec![30, 365, 1095]);
    }

    #[test]
    fn test_rejects_zero_and_duplicate_maturities() {
        let mut row = CurveRow::new(as_of());
        assert!(row.insert(0, 0.04).is_err());

        row.insert(365, 0.04).unwrap();
        let err = row.insert(365, 0.05).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
        // Original quote untouched.
        assert_eq!(row.get(365), Some(0.04));
    }

    #[test]
    fn test_get_missing() {
        let row = CurveRow::new(as_of());
        assert_eq!(row.get(365), None);
        assert!(row.is_empty());
    }

    #[test]
    fn test_batch_keyed_by_date() {
        let mut batch = CurveBatch::new();
        let d1 = Date::from_ymd(2025, 6, 3).unwrap();
        let d0 = as_of();

        batch.insert(CurveRow::from_points(d1, [(365, 0.042)]).unwrap());
        batch.insert(CurveRow::from_points(d0, [(365, 0.041)]).unwrap());

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.first_date(), Some(d0));
        let dates: Vec<Date> = batch.iter().map(|(d, _)| d).collect();
        assert_eq!(dates, vec![d0, d1]);
    }

    #[test]
    fn test_row_serde_round_trip() {
        let row = CurveRow::from_points(as_of(), [(365, 0.03), (730, 0.035)]).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        let back: CurveRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
