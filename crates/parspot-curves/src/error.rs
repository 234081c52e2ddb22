//! Error types for curve construction.

use parspot_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors raised while bootstrapping or recovering yields.
///
/// Every variant names the maturity it belongs to: failures are always
/// maturity-local, and callers report them against (date, maturity) pairs
/// without guessing which point broke.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// The bootstrap base `1 - sum_discounted_coupons` was not positive,
    /// so the fractional power has no real value.
    #[error(
        "Bootstrap domain error at {maturity_days}d: discounted coupon sum {discounted_coupons:.6} >= 1"
    )]
    MathDomain {
        /// Maturity that failed, in days.
        maturity_days: u32,
        /// The offending discounted-coupon sum.
        discounted_coupons: f64,
    },

    /// A maturity could not be solved because a shorter maturity it
    /// discounts against already failed in the same row.
    #[error("Spot rate at {maturity_days}d unavailable: depends on failed maturity {failed_at}d")]
    MissingDependency {
        /// Maturity that could not be solved, in days.
        maturity_days: u32,
        /// The shorter maturity whose failure cascaded.
        failed_at: u32,
    },

    /// The stored rate is NaN or infinite.
    #[error("Invalid rate at {maturity_days}d: {value}")]
    InvalidRate {
        /// Maturity holding the bad value, in days.
        maturity_days: u32,
        /// The non-finite value.
        value: f64,
    },

    /// The yield root finder failed for one maturity.
    #[error("Yield inversion failed at {maturity_days}d (rate {rate}): {source}")]
    YieldSolveFailed {
        /// Maturity that failed, in days.
        maturity_days: u32,
        /// The coupon-proxy rate that was being inverted.
        rate: f64,
        /// The underlying solver error.
        #[source]
        source: MathError,
    },

    /// A maturity expected in a row was not present.
    #[error("Maturity {maturity_days}d not present in row")]
    MissingMaturity {
        /// The absent maturity, in days.
        maturity_days: u32,
    },
}

impl CurveError {
    /// Creates a bootstrap domain error.
    #[must_use]
    pub fn math_domain(maturity_days: u32, discounted_coupons: f64) -> Self {
        Self::MathDomain {
            maturity_days,
            discounted_coupons,
        }
    }

    /// Creates a cascaded dependency error.
    #[must_use]
    pub fn missing_dependency(maturity_days: u32, failed_at: u32) -> Self {
        Self::MissingDependency {
            maturity_days,
            failed_at,
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(maturity_days: u32, value: f64) -> Self {
        Self::InvalidRate {
            maturity_days,
            value,
        }
    }

    /// Creates a yield solve failure.
    #[must_use]
    pub fn yield_solve_failed(maturity_days: u32, rate: f64, source: MathError) -> Self {
        Self::YieldSolveFailed {
            maturity_days,
            rate,
            source,
        }
    }

    /// Creates a missing maturity error.
    #[must_use]
    pub fn missing_maturity(maturity_days: u32) -> Self {
        Self::MissingMaturity { maturity_days }
    }

    /// The maturity this error belongs to, in days.
    #[must_use]
    pub fn maturity_days(&self) -> u32 {
        match self {
            Self::MathDomain { maturity_days, .. }
            | Self::MissingDependency { maturity_days, .. }
            | Self::InvalidRate { maturity_days, .. }
            | Self::YieldSolveFailed { maturity_days, .. }
            | Self::MissingMaturity { maturity_days } => *maturity_days,
        }
    }
}
