//! Error types for feed parsing and archiving.

use parspot_core::ParspotError;
use parspot_storage::StorageError;
use thiserror::Error;

/// A specialized Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors raised while normalizing or archiving curve tables.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The table's column header does not match the expected tenor set.
    /// This is fatal: an unexpected shape means the provider changed the
    /// product, not that a value is missing.
    #[error("Unexpected columns: expected [{expected}], got [{got}]")]
    UnexpectedColumns {
        /// The expected header, comma-joined.
        expected: String,
        /// The header actually found, comma-joined.
        got: String,
    },

    /// A date cell could not be parsed.
    #[error("Invalid date cell: '{value}'")]
    InvalidDate {
        /// The offending cell contents.
        value: String,
    },

    /// A rate cell could not be parsed.
    #[error("Invalid rate in column '{column}': '{value}'")]
    InvalidRate {
        /// Column the cell belongs to.
        column: String,
        /// The offending cell contents.
        value: String,
    },

    /// Error from the CSV layer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from the core types (tenor or date arithmetic).
    #[error(transparent)]
    Core(#[from] ParspotError),

    /// Error from the storage layer.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FeedError {
    /// Creates an unexpected-columns error from header slices.
    #[must_use]
    pub fn unexpected_columns(expected: &[&str], got: &[String]) -> Self {
        Self::UnexpectedColumns {
            expected: expected.join(", "),
            got: got.join(", "),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
        }
    }

    /// Creates an invalid rate error.
    #[must_use]
    pub fn invalid_rate(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidRate {
            column: column.into(),
            value: value.into(),
        }
    }
}
