//! Round-trip repricing validation for bootstrapped rows.
//!
//! The defining correctness property of the bootstrap is that the spot
//! row reprices every input par bond to face value. This module makes the
//! check a first-class artifact: every validated bootstrap carries a
//! report showing, maturity by maturity, how far from par the spot curve
//! lands.

use std::fmt;
use std::time::{Duration, Instant};

use parspot_core::CurveRow;

use crate::bootstrap::{bootstrap_spot_rates, DAYS_PER_YEAR, MIN_COUPON_MATURITY_DAYS};
use crate::error::{CurveError, CurveResult};
use crate::outcome::RowOutcome;

/// Repricing tolerances, in absolute price terms per unit face value.
pub mod tolerances {
    /// Round-trip tolerance for a freshly bootstrapped row.
    pub const ROUND_TRIP: f64 = 1e-8;

    /// Relaxed tolerance for exploratory checks.
    pub const RELAXED: f64 = 1e-6;
}

/// Prices one par bond's cash flows against a bootstrapped spot row.
///
/// Under the bootstrap's own discounting, the bond quoted at maturity `n`
/// with par rate `C` prices as
///
/// ```text
/// price = Σ over shorter coupon maturities i of  C / (1 + S_i)^t_i
///       + (1 + C/2) / (1 + S_n)^(2 t_n)
/// ```
///
/// and a correct spot row returns exactly 1.0.
///
/// # Errors
///
/// Returns `CurveError::MissingMaturity` if `maturity_days` is absent
/// from either row (in the spot row that means the maturity failed to
/// bootstrap).
pub fn par_bond_price(
    par_row: &CurveRow,
    spot_row: &CurveRow,
    maturity_days: u32,
) -> CurveResult<f64> {
    let coupon = par_row
        .get(maturity_days)
        .ok_or_else(|| CurveError::missing_maturity(maturity_days))?;
    let spot = spot_row
        .get(maturity_days)
        .ok_or_else(|| CurveError::missing_maturity(maturity_days))?;

    let discounted_coupons: f64 = spot_row
        .iter()
        .filter(|(days, _)| *days >= MIN_COUPON_MATURITY_DAYS && *days < maturity_days)
        .map(|(days, s_i)| {
            let t_i = f64::from(days) / DAYS_PER_YEAR;
            coupon / (1.0 + s_i).powf(t_i)
        })
        .sum();

    let t_n = f64::from(maturity_days) / DAYS_PER_YEAR;
    Ok(discounted_coupons + (1.0 + coupon / 2.0) / (1.0 + spot).powf(2.0 * t_n))
}

/// Result of repricing a single maturity against the spot row.
#[derive(Debug, Clone)]
pub struct RepricingCheck {
    /// Maturity checked, in days.
    pub maturity_days: u32,
    /// The target price (par, 1.0).
    pub target_price: f64,
    /// Model price from the spot row.
    pub model_price: f64,
    /// Absolute error `|model - target|`.
    pub error: f64,
    /// Tolerance applied.
    pub tolerance: f64,
    /// Whether the check passed.
    pub passed: bool,
}

impl RepricingCheck {
    /// Creates a check, deriving error and pass/fail.
    #[must_use]
    pub fn new(maturity_days: u32, target_price: f64, model_price: f64, tolerance: f64) -> Self {
        let error = (model_price - target_price).abs();
        Self {
            maturity_days,
            target_price,
            model_price,
            error,
            tolerance,
            passed: error <= tolerance,
        }
    }
}

impl fmt::Display for RepricingCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASSED" } else { "FAILED" };
        write!(
            f,
            "{} {:>6}d | price: {:.10} | error: {:.2e} (tol: {:.1e})",
            status, self.maturity_days, self.model_price, self.error, self.tolerance
        )
    }
}

/// Full repricing report for one bootstrapped row.
#[derive(Debug, Clone)]
pub struct RepricingReport {
    checks: Vec<RepricingCheck>,
    max_error: f64,
    all_passed: bool,
}

impl RepricingReport {
    /// Builds a report from individual checks.
    #[must_use]
    pub fn new(checks: Vec<RepricingCheck>) -> Self {
        let max_error = checks.iter().map(|c| c.error).fold(0.0, f64::max);
        let all_passed = checks.iter().all(|c| c.passed);
        Self {
            checks,
            max_error,
            all_passed,
        }
    }

    /// The individual checks.
    #[must_use]
    pub fn checks(&self) -> &[RepricingCheck] {
        &self.checks
    }

    /// Largest absolute repricing error.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.max_error
    }

    /// Whether every maturity repriced within tolerance.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Maturities that failed, in days.
    #[must_use]
    pub fn failed_maturities(&self) -> Vec<u32> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.maturity_days)
            .collect()
    }
}

impl fmt::Display for RepricingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Repricing: {}/{} maturities within tolerance (max error {:.2e})",
            self.checks.iter().filter(|c| c.passed).count(),
            self.checks.len(),
            self.max_error
        )?;
        for check in &self.checks {
            writeln!(f, "  {check}")?;
        }
        Ok(())
    }
}

/// Wall-clock timer for curve builds.
#[derive(Debug)]
pub struct BuildTimer(Instant);

impl BuildTimer {
    /// Starts the timer.
    #[must_use]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Elapsed time since start.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// A bootstrapped row together with its repricing audit.
#[derive(Debug, Clone)]
pub struct BootstrapResult {
    /// The bootstrap outcome (spot row plus failures).
    pub outcome: RowOutcome,
    /// Round-trip repricing report over the solved maturities.
    pub report: RepricingReport,
    /// How long the build took.
    pub build_duration: Duration,
}

impl BootstrapResult {
    /// Whether the row solved completely and repriced within tolerance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcome.is_clean() && self.report.all_passed()
    }
}

/// Bootstraps a row and validates it by repricing every solved
/// coupon-bearing maturity back to par.
///
/// Repricing never alters the outcome; it only measures it. Failed
/// maturities carry no check (they have no spot to price with) and are
/// already reported in the outcome's failure list.
#[must_use]
pub fn bootstrap_validated(row: &CurveRow) -> BootstrapResult {
    let timer = BuildTimer::start();

    let outcome = bootstrap_spot_rates(row);

    let checks = outcome
        .row
        .maturities()
        .filter(|days| *days >= MIN_COUPON_MATURITY_DAYS)
        .filter_map(|days| {
            par_bond_price(row, &outcome.row, days)
                .ok()
                .map(|price| RepricingCheck::new(days, 1.0, price, tolerances::ROUND_TRIP))
        })
        .collect();

    BootstrapResult {
        outcome,
        report: RepricingReport::new(checks),
        build_duration: timer.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use parspot_core::Date;
    use proptest::prelude::*;

    fn as_of() -> Date {
        Date::from_ymd(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_round_trip_to_par() {
        let par = CurveRow::from_points(
            as_of(),
            [(365, 0.0301), (730, 0.0312), (1095, 0.0325), (1825, 0.0340)],
        )
        .unwrap();

        let result = bootstrap_validated(&par);

        assert!(result.is_valid(), "failed: {}", result.report);
        assert_eq!(result.report.checks().len(), 4);
        assert!(result.report.max_error() < tolerances::ROUND_TRIP);
    }

    #[test]
    fn test_flat_curve_round_trips() {
        let par =
            CurveRow::from_points(as_of(), [(365, 0.04), (730, 0.04), (1095, 0.04)]).unwrap();

        let result = bootstrap_validated(&par);

        assert!(result.is_valid());
        for check in result.report.checks() {
            assert_relative_eq!(check.model_price, 1.0, epsilon = tolerances::ROUND_TRIP);
        }
    }

    #[test]
    fn test_sub_year_maturities_not_checked() {
        let par = CurveRow::from_points(as_of(), [(30, 0.043), (365, 0.03)]).unwrap();

        let result = bootstrap_validated(&par);

        assert_eq!(result.report.checks().len(), 1);
        assert_eq!(result.report.checks()[0].maturity_days, 365);
    }

    #[test]
    fn test_failed_maturity_has_no_check() {
        let par =
            CurveRow::from_points(as_of(), [(365, 0.01), (730, 0.01), (1095, 0.8)]).unwrap();

        let result = bootstrap_validated(&par);

        assert!(!result.is_valid());
        // Only the two solved maturities get checks, and they pass.
        assert_eq!(result.report.checks().len(), 2);
        assert!(result.report.all_passed());
        assert_eq!(result.outcome.failed_maturities(), vec![1095]);
    }

    #[test]
    fn test_price_detects_perturbed_spot() {
        let par = CurveRow::from_points(as_of(), [(365, 0.03), (730, 0.035)]).unwrap();
        let outcome = bootstrap_spot_rates(&par);

        // Nudge the 2Y spot; the 2Y bond no longer prices at par.
        let mut broken = CurveRow::new(as_of());
        for (days, rate) in outcome.row.iter() {
            let rate = if days == 730 { rate + 1e-4 } else { rate };
            broken.insert(days, rate).unwrap();
        }

        let price = par_bond_price(&par, &broken, 730).unwrap();
        assert!((price - 1.0).abs() > 1e-5);
    }

    #[test]
    fn test_missing_maturity_error() {
        let par = CurveRow::from_points(as_of(), [(365, 0.03)]).unwrap();
        let spot = bootstrap_spot_rates(&par).row;

        let err = par_bond_price(&par, &spot, 730).unwrap_err();
        assert!(matches!(err, CurveError::MissingMaturity { .. }));
    }

    #[test]
    fn test_report_display() {
        let par = CurveRow::from_points(as_of(), [(365, 0.03), (730, 0.035)]).unwrap();
        let result = bootstrap_validated(&par);

        let text = result.report.to_string();
        assert!(text.contains("PASSED"));
        assert!(text.contains("365d"));
    }

    proptest! {
        #[test]
        fn prop_round_trip_holds_for_sane_curves(
            rates in proptest::collection::vec(0.001..0.08f64, 5),
        ) {
            let maturities = [365u32, 730, 1095, 1460, 1825];
            let par = CurveRow::from_points(
                as_of(),
                maturities.iter().copied().zip(rates),
            ).unwrap();

            let result = bootstrap_validated(&par);

            prop_assert!(result.is_valid());
            prop_assert!(result.report.max_error() < tolerances::ROUND_TRIP);
        }
    }
}
