//! Error types for the firedoc facade.
//!
//! This module provides the crate-wide error type used by the facade and
//! every backend. The variants keep "not found", "transport failure", and
//! "bad input" distinguishable so callers can branch meaningfully instead
//! of treating every failure the same.

use thiserror::Error;

/// Core error type for firedoc operations.
///
/// Backends map their client-specific errors into these variants so the
/// facade surface stays uniform regardless of the database behind it.
#[derive(Error, Debug)]
pub enum FiredocError {
    /// I/O related errors (credentials files, local resources).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration validation errors, detected before any client is built.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Input validation errors (malformed paths, id mismatches).
    #[error("Validation error: {message}")]
    Validation {
        /// Detailed error message
        message: String,
    },

    /// The requested document or collection does not exist.
    #[error("Not found: {resource}")]
    NotFound {
        /// Name of the missing resource
        resource: String,
    },

    /// Authentication failures against the backing database.
    #[error("Authentication failed")]
    Authentication,

    /// Permission denied by the backing database.
    #[error("Permission denied")]
    Permission,

    /// Operation timeout errors.
    #[error("Timeout: {operation}")]
    Timeout {
        /// Name of the operation that timed out
        operation: String,
    },

    /// Transport or backend faults from the document database client.
    #[error("Backend error: {message}")]
    Backend {
        /// Detailed error message
        message: String,
    },

    /// Internal invariant violations (e.g. a delete that left the
    /// document behind).
    #[error("Internal error: {message}")]
    Internal {
        /// Detailed error message
        message: String,
    },

    /// Generic errors from external dependencies.
    #[error("External error: {source}")]
    External {
        /// The underlying error
        #[source]
        source: anyhow::Error,
    },
}

impl FiredocError {
    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error with a message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not found error with a resource name.
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a new timeout error with an operation name.
    pub fn timeout<S: Into<String>>(operation: S) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// Create a new backend error with a message.
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Create a new internal error with a message.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a new external error from any error that implements `Into<anyhow::Error>`.
    pub fn external<E: Into<anyhow::Error>>(error: E) -> Self {
        Self::External {
            source: error.into(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// Returns `true` for transient errors that might succeed on retry,
    /// such as network timeouts. The facade itself never retries; this is
    /// a hint for callers that do.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Backend { .. } | Self::Io(_))
    }

    /// Check if this error is a client error (4xx-style).
    ///
    /// Returns `true` for errors caused by invalid input or configuration
    /// that won't be fixed by retrying.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::Configuration { .. }
                | Self::NotFound { .. }
                | Self::Authentication
                | Self::Permission
        )
    }

    /// Check if this error means the requested resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convert from `anyhow::Error` to `FiredocError`.
impl From<anyhow::Error> for FiredocError {
    fn from(error: anyhow::Error) -> Self {
        Self::External { source: error }
    }
}

/// Result type alias for convenience.
///
/// This is the standard result type used throughout the firedoc crates.
pub type Result<T> = std::result::Result<T, FiredocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FiredocError::backend("connection reset");
        assert!(matches!(err, FiredocError::Backend { .. }));
        assert_eq!(err.to_string(), "Backend error: connection reset");
    }

    #[test]
    fn test_error_retryable() {
        assert!(FiredocError::timeout("commit").is_retryable());
        assert!(FiredocError::backend("unavailable").is_retryable());
        assert!(!FiredocError::validation("bad path").is_retryable());
    }

    #[test]
    fn test_error_client_error() {
        assert!(FiredocError::validation("bad path").is_client_error());
        assert!(FiredocError::Authentication.is_client_error());
        assert!(!FiredocError::timeout("commit").is_client_error());
    }

    #[test]
    fn test_error_not_found() {
        assert!(FiredocError::not_found("documents/abc").is_not_found());
        assert!(!FiredocError::backend("boom").is_not_found());
    }
}
