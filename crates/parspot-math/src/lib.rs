//! # Parspot Math
//!
//! Numerical root finding for the Parspot par-yield curve bootstrapping
//! toolkit.
//!
//! The yield-to-maturity inversion needs exactly one tool: a bounded,
//! derivative-based root finder. This crate provides Newton-Raphson with
//! an analytic or finite-difference derivative, plus the configuration
//! and result types shared by its callers.
//!
//! ## Example
//!
//! ```rust
//! use parspot_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Solve x^2 = 2.
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let result = newton_raphson(f, df, 1.0, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{newton_raphson, newton_raphson_numerical, SolverConfig, SolverResult};
