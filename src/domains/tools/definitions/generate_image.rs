//! Image generation tool.
//!
//! The only tool with a credential: the [`ImageClient`] is built at
//! startup from configuration and injected here, so a missing token is
//! reported by this tool alone and never blocks the rest of the
//! catalog.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use super::common::{error_result, parse_params};
use super::ToolDefinition;
use crate::core::config::TOKEN_ENV_VAR;
use crate::core::schema::FieldSpec;
use crate::upstream::hf_inference::ImageClient;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageParams {
    pub prompt: String,
}

/// Image generation tool implementation, backed by FLUX.1-schnell via
/// the Hugging Face inference API.
#[derive(Debug, Clone)]
pub struct GenerateImageTool {
    client: Arc<ImageClient>,
}

impl GenerateImageTool {
    pub const NAME: &'static str = "generate_image";

    pub const DESCRIPTION: &'static str =
        "Generates an image from a text prompt using the FLUX.1-schnell model \
         (English prompts recommended).";

    pub fn new(client: Arc<ImageClient>) -> Self {
        Self { client }
    }

    /// Run the generation and wrap the outcome. Blocking.
    pub fn execute(client: &ImageClient, params: &GenerateImageParams) -> CallToolResult {
        match client.generate(&params.prompt) {
            Ok(base64_png) => {
                CallToolResult::success(vec![Content::image(base64_png, "image/png")])
            }
            Err(e) => {
                error!("Image generation failed: {}", e);
                error_result(&format!(
                    "Image generation failed: {}\n\
                     Check that {} is set to a valid Hugging Face token.",
                    e, TOKEN_ENV_VAR
                ))
            }
        }
    }
}

#[async_trait]
impl ToolDefinition for GenerateImageTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![FieldSpec::string(
            "prompt",
            "Text prompt describing the image to generate",
        )]
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: GenerateImageParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };

        if !self.client.has_token() {
            return error_result(&format!(
                "Image backend credential missing: set the {} environment variable \
                 to a Hugging Face API token.",
                TOKEN_ENV_VAR
            ));
        }

        let client = self.client.clone();
        tokio::task::spawn_blocking(move || GenerateImageTool::execute(&client, &params))
            .await
            .unwrap_or_else(|e| error_result(&format!("Image generation task failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{args, first_text};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_token_names_required_setting() {
        let tool = GenerateImageTool::new(Arc::new(ImageClient::new(None)));
        let result = tool.call(args(json!({ "prompt": "a red fox" }))).await;
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains(TOKEN_ENV_VAR));
    }

    #[test]
    fn test_tool_has_no_advisory_output_schema() {
        // Image responses are not text envelopes; no schema is declared.
        let tool = GenerateImageTool::new(Arc::new(ImageClient::new(None)));
        assert!(tool.output_schema().is_none());
    }
}
