//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool registration.
///
/// An unknown tool name at dispatch time is a caller mistake and is
/// reported on the protocol as invalid params, not through this type.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with the same name was already registered. Registration
    /// happens once at startup, so this aborts server construction.
    #[error("Tool already registered: {0}")]
    Conflict(String),
}

impl ToolError {
    /// Create a new "conflict" error.
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict(name.into())
    }
}
