//! # Parspot Curves
//!
//! Spot-rate bootstrapping and yield recovery for daily par-rate curves.
//!
//! This crate is the numerical heart of Parspot:
//!
//! - **Bootstrap**: semi-annual par-to-spot construction, maturity by
//!   maturity, each spot discounting the next bond's earlier coupons
//! - **Yield recovery**: Newton inversion of the repricing function back
//!   into one flat semi-annually compounded yield per maturity
//! - **Repricing**: round-trip validation that the spot curve reproduces
//!   par value for every input instrument
//! - **Pipeline**: per-date batch conversion with maturity-level failure
//!   isolation, serial or rayon-parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use parspot_core::{CurveRow, Date};
//! use parspot_curves::prelude::*;
//!
//! let as_of = Date::from_ymd(2025, 6, 2).unwrap();
//! let par = CurveRow::from_points(as_of, [(365, 0.03), (730, 0.035)]).unwrap();
//!
//! let spots = bootstrap_spot_rates(&par);
//! assert!(spots.is_clean());
//!
//! let yields = recover_ytm(&spots.row, &SolverConfig::default());
//! assert_eq!(yields.row.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bootstrap;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod repricing;
pub mod ytm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{bootstrap_spot_rates, DAYS_PER_YEAR, MIN_COUPON_MATURITY_DAYS};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::outcome::{PointFailure, RowOutcome};
    pub use crate::pipeline::{
        convert_batch, convert_batch_parallel, convert_row, BatchOutcome, RowConversion,
    };
    pub use crate::repricing::{
        bootstrap_validated, par_bond_price, tolerances, BootstrapResult, RepricingCheck,
        RepricingReport,
    };
    pub use crate::ytm::{recover_ytm, DEFAULT_INITIAL_GUESS};
    pub use parspot_math::solvers::SolverConfig;
}
