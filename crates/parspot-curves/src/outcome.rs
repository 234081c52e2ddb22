//! Per-row results with maturity-level failure diagnostics.

use std::fmt;

use parspot_core::CurveRow;

use crate::error::CurveError;

/// One maturity's failure inside an otherwise processed row.
#[derive(Debug, Clone)]
pub struct PointFailure {
    /// The maturity that failed, in days.
    pub maturity_days: u32,
    /// What went wrong.
    pub error: CurveError,
}

impl fmt::Display for PointFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d: {}", self.maturity_days, self.error)
    }
}

/// Result of transforming one curve row.
///
/// The output row holds every maturity that solved; failed maturities are
/// absent from it and listed in `failures` instead - a missing value with
/// a diagnostic, never a silently wrong number. The input row is always
/// left untouched.
#[derive(Debug, Clone)]
pub struct RowOutcome {
    /// The transformed row (solved maturities only).
    pub row: CurveRow,
    /// Per-maturity failures, in increasing maturity order.
    pub failures: Vec<PointFailure>,
}

impl RowOutcome {
    /// Creates an outcome with no failures.
    #[must_use]
    pub fn clean(row: CurveRow) -> Self {
        Self {
            row,
            failures: Vec::new(),
        }
    }

    /// Whether every maturity solved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed maturities, in days.
    #[must_use]
    pub fn failed_maturities(&self) -> Vec<u32> {
        self.failures.iter().map(|f| f.maturity_days).collect()
    }

    /// Returns the failure recorded for a maturity, if any.
    #[must_use]
    pub fn failure_at(&self, maturity_days: u32) -> Option<&CurveError> {
        self.failures
            .iter()
            .find(|f| f.maturity_days == maturity_days)
            .map(|f| &f.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parspot_core::Date;

    #[test]
    fn test_outcome_accessors() {
        let as_of = Date::from_ymd(2025, 6, 2).unwrap();
        let row = CurveRow::from_points(as_of, [(365, 0.03)]).unwrap();

        let mut outcome = RowOutcome::clean(row);
        assert!(outcome.is_clean());
        assert!(outcome.failure_at(730).is_none());

        outcome.failures.push(PointFailure {
            maturity_days: 730,
            error: CurveError::math_domain(730, 1.1),
        });
        assert!(!outcome.is_clean());
        assert_eq!(outcome.failed_maturities(), vec![730]);
        assert!(outcome.failure_at(730).is_some());
    }
}
