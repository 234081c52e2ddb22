//! # Parspot Feeds
//!
//! Par-rate feed normalization and curve archiving.
//!
//! The curve mathematics wants one thing: rows of (day-count, decimal
//! rate) pairs. Providers publish something else - tenor-labeled,
//! percentage-quoted daily CSV tables. This crate bridges the two:
//!
//! - **Normalization**: validates the quoted tenor set, converts labels
//!   to day-counts, rescales percentages to decimals
//! - **Sources**: the [`ParRateSource`] trait and its CSV file
//!   implementation
//! - **Archiving**: tabular CSV round-trip of curve batches through an
//!   object store, best-effort by design
//! - **Dataset**: [`TreasuryDailyYields`] wires source, conversion, and
//!   archive into the one-call daily workflow
//!
//! ## Example
//!
//! ```rust
//! use parspot_feeds::parse_par_rate_csv;
//!
//! let csv = "\
//! Date,1 Mo,1.5 Month,2 Mo,3 Mo,4 Mo,6 Mo,1 Yr,2 Yr,3 Yr,5 Yr,7 Yr,10 Yr,20 Yr,30 Yr
//! 06/02/2025,4.35,4.34,4.34,4.33,4.31,4.22,4.05,3.90,3.87,3.96,4.13,4.26,4.82,4.89
//! ";
//!
//! let batch = parse_par_rate_csv(csv.as_bytes()).unwrap();
//! assert_eq!(batch.len(), 1);
//! let (_, row) = batch.iter().next().unwrap();
//! // "1 Mo" from June 2 is 30 days; 4.35% became 0.0435.
//! assert_eq!(row.get(30), Some(0.0435));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod archive;
mod dataset;
mod treasury;

pub mod error;

pub use archive::{archive_outcome, batch_from_csv, batch_to_csv};
pub use dataset::TreasuryDailyYields;
pub use error::{FeedError, FeedResult};
pub use treasury::{parse_par_rate_csv, CsvParRateSource, ParRateSource, STANDARD_TENOR_LABELS};
