//! Calculator tool.
//!
//! Exact arithmetic over two operands. Division by zero is a semantic
//! condition reported in the result text, never a NaN and never a
//! fault.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;

use super::common::{mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;

const OPERATORS: &[&str] = &["+", "-", "*", "/"];

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorParams {
    pub a: f64,
    pub b: f64,
    pub operator: String,
}

/// Calculator tool implementation.
#[derive(Debug, Clone, Default)]
pub struct CalculatorTool;

impl CalculatorTool {
    pub const NAME: &'static str = "calculator";

    pub const DESCRIPTION: &'static str =
        "Applies one of the four basic arithmetic operators (+, -, *, /) to two numbers.";

    pub fn new() -> Self {
        Self
    }

    /// Compute the result text for the given params.
    pub fn execute(params: &CalculatorParams) -> String {
        let result = match params.operator.as_str() {
            "+" => params.a + params.b,
            "-" => params.a - params.b,
            "*" => params.a * params.b,
            "/" => {
                if params.b == 0.0 {
                    return "Error: division by zero is not allowed.".to_string();
                }
                params.a / params.b
            }
            // Unreachable after enum validation.
            other => return format!("Error: unknown operator '{}'.", other),
        };

        format!("{} {} {} = {}", params.a, params.operator, params.b, result)
    }
}

#[async_trait]
impl ToolDefinition for CalculatorTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::number("a", "The first operand"),
            FieldSpec::number("b", "The second operand"),
            FieldSpec::enumeration("operator", "The operator (+, -, *, /)", OPERATORS),
        ]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("The calculation result"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: CalculatorParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };
        mirrored_result(Self::execute(&params))
    }
}
