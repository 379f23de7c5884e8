//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource registration and reads.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A resource with the same URI was already registered. Occurs only
    /// at startup and aborts server construction.
    #[error("Resource already registered: {0}")]
    Conflict(String),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "conflict" error.
    pub fn conflict(uri: impl Into<String>) -> Self {
        Self::Conflict(uri.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
