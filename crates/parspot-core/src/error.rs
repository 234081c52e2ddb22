//! Error types for core operations.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type ParspotResult<T> = Result<T, ParspotError>;

/// Errors raised by the core types.
#[derive(Error, Debug, Clone)]
pub enum ParspotError {
    /// Error in date construction or arithmetic.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A tenor label could not be parsed.
    #[error("Invalid tenor '{label}': {reason}")]
    InvalidTenor {
        /// The offending label.
        label: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A maturity day-count that the curve row cannot hold.
    #[error("Invalid maturity: {days} days - {reason}")]
    InvalidMaturity {
        /// The offending day-count.
        days: u32,
        /// Why it was rejected.
        reason: String,
    },
}

impl ParspotError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid maturity error.
    #[must_use]
    pub fn invalid_maturity(days: u32, reason: impl Into<String>) -> Self {
        Self::InvalidMaturity {
            days,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParspotError::invalid_date("2025-02-30 does not exist");
        assert!(err.to_string().contains("Invalid date"));

        let err = ParspotError::invalid_tenor("9 Fortnights", "unknown unit");
        assert!(err.to_string().contains("9 Fortnights"));
        assert!(err.to_string().contains("unknown unit"));
    }
}
