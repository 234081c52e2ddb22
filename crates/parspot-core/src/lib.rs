//! # Parspot Core
//!
//! Core types for the Parspot par-yield curve bootstrapping toolkit.
//!
//! This crate provides the foundational building blocks used throughout
//! Parspot:
//!
//! - **Dates**: a calendar [`Date`] newtype with the arithmetic needed for
//!   tenor-to-day-count conversion
//! - **Tenors**: quoted maturity labels ("3 Mo", "10 Yr") and their exact
//!   day offsets from an as-of date
//! - **Curve rows**: one date's ordered maturity-to-rate mapping, and
//!   batches of such rows keyed by observation date
//!
//! The same row type carries par rates (input), spot rates (bootstrap
//! output), and yields to maturity (final output); only the interpretation
//! of the values changes as a row moves through the pipeline.
//!
//! ## Example
//!
//! ```rust
//! use parspot_core::{CurveRow, Date};
//!
//! let as_of = Date::from_ymd(2025, 6, 2).unwrap();
//! let mut row = CurveRow::new(as_of);
//! row.insert(365, 0.0429).unwrap();
//! row.insert(730, 0.0412).unwrap();
//!
//! // Maturities always iterate shortest-first.
//! let days: Vec<u32> = row.maturities().collect();
//! assert_eq!(days, vec![365, 730]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{ParspotError, ParspotResult};
pub use types::{CurveBatch, CurveRow, Date, Tenor, TenorUnit};
