//! Storage error types.

use thiserror::Error;

/// Storage operation result type.
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types.
///
/// Failure is always a typed error, never a silent empty value: callers
/// that want best-effort semantics decide that at the call site.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No object under the requested key.
    #[error("Object not found: '{key}'")]
    NotFound {
        /// The key that was not found.
        key: String,
    },

    /// The key is not acceptable to the backend.
    #[error("Invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates an invalid-key error.
    #[must_use]
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::not_found("curves/2025/spot.csv");
        assert!(err.to_string().contains("curves/2025/spot.csv"));

        let err = StorageError::invalid_key("../escape", "path traversal");
        assert!(err.to_string().contains("traversal"));
    }
}
