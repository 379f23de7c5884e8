//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry owns every [`ToolDefinition`], keyed by unique name and
//! enumerable in registration order for capability discovery. Dispatch
//! runs the full per-call pipeline: lookup, schema validation, handler
//! invocation, and a last-resort catch that turns a panicking handler
//! into a generic error envelope. Nothing a single bad request does can
//! escape to the transport.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::common::error_result;
use super::definitions::{
    CalculatorTool, CodeReviewPromptTool, CurrentTimeTool, GenerateImageTool, GeocodeTool,
    GreetTool, ToolDefinition, WeatherTool,
};
use super::error::ToolError;
use crate::core::config::Config;
use crate::core::schema::{to_input_schema, validate};
use crate::upstream::hf_inference::ImageClient;

/// Registry of all available tools.
pub struct ToolRegistry {
    /// Definitions in registration order.
    entries: Vec<Arc<dyn ToolDefinition>>,

    /// Name to position in `entries`.
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool. Fails when the name is already taken.
    pub fn register(&mut self, definition: Arc<dyn ToolDefinition>) -> Result<(), ToolError> {
        let name = definition.name();
        if self.index.contains_key(name) {
            return Err(ToolError::conflict(name));
        }
        info!("Registering tool: {}", name);
        self.index.insert(name, self.entries.len());
        self.entries.push(definition);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn ToolDefinition>> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|d| d.name()).collect()
    }

    /// All tools as metadata models, in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.entries.iter().map(|d| to_tool(d.as_ref())).collect()
    }

    /// Dispatch a tool call: lookup, validate, invoke.
    ///
    /// Validation problems surface as a protocol `invalid_params` error
    /// carrying the per-field failure list; everything past validation
    /// comes back as a result envelope.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let definition = self.lookup(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            McpError::invalid_params(format!("Unknown tool: {}", name), None)
        })?;

        let schema = definition.input_schema();
        let validated = validate(&schema, &arguments).map_err(|failure| {
            warn!("Validation failed for {}: {}", name, failure);
            let data = serde_json::to_value(&failure).unwrap_or(Value::Null);
            McpError::invalid_params(failure.to_string(), Some(data))
        })?;

        // Run the handler on its own task so a panic surfaces as a
        // JoinError and becomes a generic error envelope.
        let definition = definition.clone();
        match tokio::spawn(async move { definition.call(validated).await }).await {
            Ok(result) => Ok(result),
            Err(e) => Ok(error_result(&format!(
                "Tool '{}' aborted unexpectedly: {}",
                name, e
            ))),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the metadata model for a definition.
fn to_tool(definition: &dyn ToolDefinition) -> Tool {
    let mut tool = Tool::new(
        definition.name(),
        definition.description(),
        Arc::new(to_input_schema(&definition.input_schema())),
    );
    tool.output_schema = definition.output_schema().map(Arc::new);
    tool
}

/// Build the registry with the full tool catalog.
///
/// The image client is constructed here, once, from the loaded
/// credential and handed to the image tool as an explicit dependency.
pub fn default_registry(config: &Config) -> Result<ToolRegistry, ToolError> {
    let image_client = Arc::new(ImageClient::new(config.credentials.hf_token.clone()));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GreetTool::new()))?;
    registry.register(Arc::new(CalculatorTool::new()))?;
    registry.register(Arc::new(CurrentTimeTool::new()))?;
    registry.register(Arc::new(GeocodeTool::new()))?;
    registry.register(Arc::new(WeatherTool::new()))?;
    registry.register(Arc::new(GenerateImageTool::new(image_client)))?;
    registry.register(Arc::new(CodeReviewPromptTool::new()))?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::super::definitions::common::test_support::{args, first_text};
    use super::*;
    use serde_json::json;

    fn registry() -> ToolRegistry {
        default_registry(&Config::default()).unwrap()
    }

    #[test]
    fn test_registry_tool_names_in_registration_order() {
        let names = registry().tool_names();
        assert_eq!(
            names,
            vec![
                "greet",
                "calculator",
                "get_current_time",
                "geocode",
                "get_weather",
                "generate_image",
                "code_review_prompt",
            ]
        );
    }

    #[test]
    fn test_registry_rejects_duplicate_name() {
        let mut registry = registry();
        let result = registry.register(Arc::new(GreetTool::new()));
        assert!(matches!(result, Err(ToolError::Conflict(_))));
    }

    #[test]
    fn test_list_exposes_schemas() {
        let tools = registry().list();
        assert_eq!(tools.len(), 7);

        let calculator = tools.iter().find(|t| t.name == "calculator").unwrap();
        let schema = calculator.input_schema.as_ref();
        assert_eq!(schema.get("type"), Some(&json!("object")));
        assert!(
            schema
                .get("properties")
                .and_then(|p| p.get("operator"))
                .and_then(|o| o.get("enum"))
                .is_some()
        );
        assert!(calculator.output_schema.is_some());
    }

    #[tokio::test]
    async fn test_dispatch_unknown_tool() {
        let result = registry().dispatch("unknown", JsonObject::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dispatch_validation_failure_lists_fields() {
        let err = registry()
            .dispatch("greet", args(json!({ "language": "fr" })))
            .await
            .unwrap_err();
        let message = err.message.to_string();
        assert!(message.contains("name"));
        assert!(message.contains("language"));
    }

    #[tokio::test]
    async fn test_dispatch_calculator_end_to_end() {
        let result = registry()
            .dispatch("calculator", args(json!({ "a": 6, "b": 3, "operator": "*" })))
            .await
            .unwrap();
        assert_eq!(first_text(&result), "6 * 3 = 18");
    }

    #[tokio::test]
    async fn test_dispatch_division_by_zero_end_to_end() {
        let result = registry()
            .dispatch("calculator", args(json!({ "a": 10, "b": 0, "operator": "/" })))
            .await
            .unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(first_text(&result).contains("division by zero"));
    }

    #[tokio::test]
    async fn test_dispatch_applies_defaults_before_handler() {
        let result = registry()
            .dispatch("greet", args(json!({ "name": "Ada" })))
            .await
            .unwrap();
        assert!(first_text(&result).contains("Hey there, Ada"));
    }
}
