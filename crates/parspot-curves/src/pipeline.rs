//! Per-date batch conversion.
//!
//! A batch is just a collection of independent rows: each date runs the
//! bootstrap-then-yield pipeline on its own, failures are recorded
//! against that date, and the batch always runs to completion. Because
//! no state crosses rows, the parallel variant assigns one row per rayon
//! task with nothing shared.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;

use parspot_core::{CurveBatch, CurveRow, Date};
use parspot_math::solvers::SolverConfig;

use crate::bootstrap::bootstrap_spot_rates;
use crate::outcome::PointFailure;
use crate::ytm::recover_ytm;

/// One date's converted curves plus its maturity-level failures.
#[derive(Debug, Clone)]
pub struct RowConversion {
    /// Bootstrapped spot row.
    pub spot: CurveRow,
    /// Recovered yield row.
    pub ytm: CurveRow,
    /// Failures from both stages, in processing order.
    pub failures: Vec<PointFailure>,
}

impl RowConversion {
    /// Whether every maturity made it through both stages.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs one row through bootstrap and yield recovery.
///
/// The yield stage consumes the spot row, so a maturity that failed to
/// bootstrap is already absent there and cannot produce a misleading
/// yield; its diagnostic from the bootstrap stage is carried forward.
#[must_use]
pub fn convert_row(row: &CurveRow, config: &SolverConfig) -> RowConversion {
    let spots = bootstrap_spot_rates(row);
    let yields = recover_ytm(&spots.row, config);

    let mut failures = spots.failures;
    failures.extend(yields.failures);

    RowConversion {
        spot: spots.row,
        ytm: yields.row,
        failures,
    }
}

/// Converted batch: per-date results in date order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    rows: BTreeMap<Date, RowConversion>,
}

impl BatchOutcome {
    /// Per-date conversions in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &RowConversion)> + '_ {
        self.rows.iter().map(|(d, r)| (*d, r))
    }

    /// Returns one date's conversion, if present.
    #[must_use]
    pub fn get(&self, as_of: Date) -> Option<&RowConversion> {
        self.rows.get(&as_of)
    }

    /// Collects the spot rows into a batch.
    #[must_use]
    pub fn spot_batch(&self) -> CurveBatch {
        let mut batch = CurveBatch::new();
        for conversion in self.rows.values() {
            batch.insert(conversion.spot.clone());
        }
        batch
    }

    /// Collects the yield rows into a batch.
    #[must_use]
    pub fn ytm_batch(&self) -> CurveBatch {
        let mut batch = CurveBatch::new();
        for conversion in self.rows.values() {
            batch.insert(conversion.ytm.clone());
        }
        batch
    }

    /// Dates that recorded at least one failure.
    #[must_use]
    pub fn failed_dates(&self) -> Vec<Date> {
        self.rows
            .iter()
            .filter(|(_, c)| !c.is_clean())
            .map(|(d, _)| *d)
            .collect()
    }

    /// Total failures across the batch.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.rows.values().map(|c| c.failures.len()).sum()
    }

    /// Whether every maturity of every date converted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rows.values().all(RowConversion::is_clean)
    }

    /// Number of dates processed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the outcome is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn from_conversions(conversions: impl IntoIterator<Item = (Date, RowConversion)>) -> Self {
        let rows: BTreeMap<Date, RowConversion> = conversions.into_iter().collect();
        for (date, conversion) in &rows {
            for failure in &conversion.failures {
                log::warn!("curve conversion failure on {date}: {failure}");
            }
        }
        Self { rows }
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} dates converted, {} maturity failures",
            self.rows.len(),
            self.failure_count()
        )
    }
}

/// Converts every row of a batch, serially.
///
/// Failures never abort the batch: a broken maturity is logged, recorded
/// against its date, and the remaining dates still run.
#[must_use]
pub fn convert_batch(batch: &CurveBatch, config: &SolverConfig) -> BatchOutcome {
    BatchOutcome::from_conversions(
        batch
            .iter()
            .map(|(date, row)| (date, convert_row(row, config))),
    )
}

/// Converts every row of a batch across the rayon thread pool.
///
/// Rows share no state, so this is a plain parallel map: one worker per
/// row, results collected back into date order.
#[must_use]
pub fn convert_batch_parallel(batch: &CurveBatch, config: &SolverConfig) -> BatchOutcome {
    let rows: Vec<(Date, &CurveRow)> = batch.iter().collect();
    let conversions: Vec<(Date, RowConversion)> = rows
        .into_par_iter()
        .map(|(date, row)| (date, convert_row(row, config)))
        .collect();
    BatchOutcome::from_conversions(conversions)
}
