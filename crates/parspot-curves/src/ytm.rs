//! Yield-to-maturity recovery from a bootstrapped spot row.
//!
//! Each maturity is inverted independently: no solved yield feeds a later
//! maturity, so one failed solve never contaminates its neighbours.

use parspot_core::CurveRow;
use parspot_math::solvers::{newton_raphson, SolverConfig};

use crate::bootstrap::DAYS_PER_YEAR;
use crate::error::CurveError;
use crate::outcome::{PointFailure, RowOutcome};

/// Starting point for the yield iteration: 3%.
pub const DEFAULT_INITIAL_GUESS: f64 = 0.03;

/// Recovers one flat semi-annually compounded yield per maturity.
///
/// For maturity `n` holding rate `C` (the coupon proxy), with `t = n/365`
/// and `T` the year fractions of every maturity in the row up to and
/// including `n`, the yield solves
///
/// ```text
/// f(Y) = Σ over t_i in T of (C/2) / (1 + Y/2)^(2 t_i)
///      + (1 + C/2) / (1 + Y/2)^(2 t)  -  1  =  0
/// ```
///
/// via Newton-Raphson with the analytic derivative, starting at
/// [`DEFAULT_INITIAL_GUESS`]. The time set `T` is rebuilt per maturity
/// from the row itself; only the target maturity's stored rate enters the
/// objective.
///
/// Non-convergence or a non-finite stored rate fails that maturity alone;
/// the rest of the row still solves. The input row is not modified.
#[must_use]
pub fn recover_ytm(row: &CurveRow, config: &SolverConfig) -> RowOutcome {
    let mut out = CurveRow::new(row.as_of());
    let mut failures = Vec::new();

    // Year fractions of every maturity seen so far, current one included.
    let mut times: Vec<f64> = Vec::with_capacity(row.len());

    for (days, rate) in row.iter() {
        let t_n = f64::from(days) / DAYS_PER_YEAR;
        times.push(t_n);

        if !rate.is_finite() {
            failures.push(PointFailure {
                maturity_days: days,
                error: CurveError::invalid_rate(days, rate),
            });
            continue;
        }

        let coupon = rate;
        let coupon_times = times.clone();

        let f = |y: f64| {
            let half = 1.0 + y / 2.0;
            let coupons: f64 = coupon_times
                .iter()
                .map(|&t_i| (coupon / 2.0) / half.powf(2.0 * t_i))
                .sum();
            coupons + (1.0 + coupon / 2.0) / half.powf(2.0 * t_n) - 1.0
        };
        let df = |y: f64| {
            let half = 1.0 + y / 2.0;
            let coupons: f64 = coupon_times
                .iter()
                .map(|&t_i| -(coupon / 2.0) * t_i * half.powf(-2.0 * t_i - 1.0))
                .sum();
            coupons - (1.0 + coupon / 2.0) * t_n * half.powf(-2.0 * t_n - 1.0)
        };

        match newton_raphson(f, df, DEFAULT_INITIAL_GUESS, config) {
            Ok(result) => {
                out.insert(days, result.root)
                    .expect("input maturities are unique");
            }
            Err(err) => {
                failures.push(PointFailure {
                    maturity_days: days,
                    error: CurveError::yield_solve_failed(days, coupon, err),
                });
            }
        }
    }

    RowOutcome { row: out, failures }
}
