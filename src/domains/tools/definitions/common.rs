//! Helpers shared across tool definitions.
//!
//! Envelope construction lives here so every tool builds responses the
//! same way: text results carry a structured mirror of their content,
//! error results are flagged but remain ordinary envelopes.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::warn;

/// A success envelope whose text is mirrored as structured content.
pub fn mirrored_result(text: impl Into<String>) -> CallToolResult {
    let text = text.into();
    let structured = json!({
        "content": [{ "type": "text", "text": text.clone() }]
    });
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(structured);
    result
}

/// An error envelope with a human-readable message. Still a content
/// envelope, never a protocol fault.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Deserialize validated arguments into a typed params struct.
///
/// Validation guarantees shape, so a failure here is a schema/params
/// mismatch inside this crate rather than bad caller input.
pub fn parse_params<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, CallToolResult> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| error_result(&format!("Internal parameter mismatch: {}", e)))
}

/// The advisory output shape shared by the text tools: an envelope with
/// an array of text content items.
pub fn text_content_output_schema(item_description: &str) -> JsonObject {
    let schema = json!({
        "type": "object",
        "properties": {
            "content": {
                "type": "array",
                "description": item_description,
                "items": {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "const": "text" },
                        "text": { "type": "string", "description": item_description }
                    },
                    "required": ["type", "text"]
                }
            }
        },
        "required": ["content"]
    });
    schema
        .as_object()
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
pub mod test_support {
    use rmcp::model::{CallToolResult, JsonObject, RawContent};
    use serde_json::Value;

    /// Extract the first text content item from a result.
    pub fn first_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        }
    }

    /// Build a JsonObject from a `json!` literal.
    pub fn args(value: Value) -> JsonObject {
        value.as_object().expect("test arguments must be an object").clone()
    }
}
