//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type over the domain errors,
//! providing consistent error handling across the entire application.
//! Both variants occur only during startup registration; request-time
//! failures stay inside the handlers as envelopes.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),
}
