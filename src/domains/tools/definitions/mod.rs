//! Tool definitions module.
//!
//! Each tool lives in its own file and implements [`ToolDefinition`]:
//! metadata, a declarative input schema, and the handler itself.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs::default_registry()`
//!
//! The handler contract is uniform: `call` receives arguments that have
//! already passed schema validation, and must convert every failure it
//! can encounter (upstream errors, malformed payloads, missing
//! configuration) into a result envelope. Nothing a tool does may
//! surface as a protocol-level fault.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};

use crate::core::schema::FieldSpec;

pub mod common;

mod calculator;
mod code_review;
mod current_time;
mod generate_image;
mod geocode;
mod greet;
mod weather;

pub use calculator::CalculatorTool;
pub use code_review::CodeReviewPromptTool;
pub use current_time::CurrentTimeTool;
pub use generate_image::GenerateImageTool;
pub use geocode::GeocodeTool;
pub use greet::GreetTool;
pub use weather::WeatherTool;

/// Trait implemented by every tool.
#[async_trait]
pub trait ToolDefinition: Send + Sync {
    /// The unique name the tool is registered under.
    fn name(&self) -> &'static str;

    /// The description shown to clients.
    fn description(&self) -> &'static str;

    /// The declarative input schema, validated before `call` runs.
    fn input_schema(&self) -> Vec<FieldSpec>;

    /// Advisory output schema, when the tool declares one. Not enforced
    /// at runtime.
    fn output_schema(&self) -> Option<JsonObject> {
        None
    }

    /// Execute the tool with validated, defaulted arguments.
    async fn call(&self, arguments: JsonObject) -> CallToolResult;
}
