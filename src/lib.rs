//! Toolbox MCP Server Library
//!
//! This crate provides a general-purpose Model Context Protocol (MCP)
//! server with a modular architecture organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   schema validation, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Per-city data resources that can be read by clients
//! - **upstream**: Clients for the external HTTP APIs the tools call
//!
//! # Example
//!
//! ```rust,no_run
//! use toolbox_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod upstream;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
