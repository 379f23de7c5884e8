//! Greeting tool.
//!
//! Pure: picks one of three fixed language templates and interpolates
//! the supplied name. No I/O.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;

use super::common::{mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;

/// Languages the greeting supports.
const LANGUAGES: &[&str] = &["ko", "en", "id"];

#[derive(Debug, Clone, Deserialize)]
pub struct GreetParams {
    pub name: String,
    pub language: String,
}

/// Greeting tool implementation.
#[derive(Debug, Clone, Default)]
pub struct GreetTool;

impl GreetTool {
    pub const NAME: &'static str = "greet";

    pub const DESCRIPTION: &'static str =
        "Returns a greeting for the given name in the requested language (ko, en, or id).";

    pub fn new() -> Self {
        Self
    }

    /// Build the greeting text for the given params.
    pub fn execute(params: &GreetParams) -> String {
        match params.language.as_str() {
            "ko" => format!("안녕하세요, {}님!", params.name),
            "id" => format!("Halo, {}! 👋 Senang bertemu dengan Anda!", params.name),
            _ => format!("Hey there, {}! 👋 Nice to meet you!", params.name),
        }
    }
}

#[async_trait]
impl ToolDefinition for GreetTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::string("name", "The name of the person to greet"),
            FieldSpec::enumeration("language", "Greeting language (default: en)", LANGUAGES)
                .with_default(serde_json::json!("en")),
        ]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("The greeting"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: GreetParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };
        mirrored_result(Self::execute(&params))
    }
}
