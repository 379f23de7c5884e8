//! Tools domain module.
//!
//! Tools are the named, schema-validated operations clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central registry, validation, and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `registry.rs::default_registry()`
//!
//! Dispatch, schema publication, and error wrapping come from the
//! registry; no other file needs to change.

pub mod definitions;
mod error;
mod registry;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::{ToolRegistry, default_registry};
