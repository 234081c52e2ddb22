//! Sequential par-to-spot bootstrapping.
//!
//! Processes one row's maturities shortest-first. Each coupon-bearing
//! maturity prices a par bond whose earlier coupons are discounted at the
//! spot rates already solved within the same row, then solves the closing
//! cash flow for its own spot rate. The running spot set lives and dies
//! inside a single call, so rows never share state.

use parspot_core::CurveRow;

use crate::error::CurveError;
use crate::outcome::{PointFailure, RowOutcome};

/// Day-count denominator: maturities in days convert to year fractions at
/// 365 days per year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Shortest maturity that carries the semi-annual coupon structure.
/// Anything shorter has no full coupon period and passes through.
pub const MIN_COUPON_MATURITY_DAYS: u32 = 365;

/// Bootstraps zero-coupon spot rates from one par-rate row.
///
/// Maturities of at least one year are replaced by their bootstrapped
/// spot rate; shorter maturities keep their par quote unchanged in the
/// output row. For maturity `n` with par rate `C` and `t = n / 365`:
///
/// ```text
/// sum = Σ over solved (t_i, S_i) of  C / (1 + S_i)^t_i
/// S   = ((1 + C/2) / (1 - sum))^(1 / (2t)) - 1
/// ```
///
/// A maturity fails - without touching anything already solved - when its
/// quote is non-finite or when `sum >= 1`, which would put the base of
/// the fractional power outside the real domain. Because every later
/// coupon-bearing maturity discounts against the missing spot, the
/// failure cascades forward through the rest of the row as
/// [`CurveError::MissingDependency`]. Failed maturities are omitted from
/// the output row and reported in the outcome's failure list. A
/// non-finite sub-1-year quote is likewise reported rather than carried.
///
/// The input row is not modified.
#[must_use]
pub fn bootstrap_spot_rates(row: &CurveRow) -> RowOutcome {
    let mut out = CurveRow::new(row.as_of());
    let mut failures = Vec::new();

    // (t_i, S_i) pairs solved so far, scoped to this row only.
    let mut solved: Vec<(f64, f64)> = Vec::new();
    let mut poisoned_at: Option<u32> = None;

    for (days, rate) in row.iter() {
        if days < MIN_COUPON_MATURITY_DAYS {
            if rate.is_finite() {
                out.insert(days, rate).expect("input maturities are unique");
            } else {
                failures.push(PointFailure {
                    maturity_days: days,
                    error: CurveError::invalid_rate(days, rate),
                });
            }
            continue;
        }

        if let Some(failed_at) = poisoned_at {
            failures.push(PointFailure {
                maturity_days: days,
                error: CurveError::missing_dependency(days, failed_at),
            });
            continue;
        }

        if !rate.is_finite() {
            poisoned_at = Some(days);
            failures.push(PointFailure {
                maturity_days: days,
                error: CurveError::invalid_rate(days, rate),
            });
            continue;
        }

        let t_n = f64::from(days) / DAYS_PER_YEAR;
        let coupon = rate;

        let sum: f64 = solved
            .iter()
            .map(|&(t_i, s_i)| coupon / (1.0 + s_i).powf(t_i))
            .sum();

        let base = 1.0 - sum;
        if base <= 0.0 {
            poisoned_at = Some(days);
            failures.push(PointFailure {
                maturity_days: days,
                error: CurveError::math_domain(days, sum),
            });
            continue;
        }

        let spot = ((1.0 + coupon / 2.0) / base).powf(1.0 / (2.0 * t_n)) - 1.0;

        solved.push((t_n, spot));
        out.insert(days, spot).expect("input maturities are unique");
    }

    RowOutcome { row: out, failures }
}
