//! Code-review prompt composer tool.
//!
//! Pure string substitution into a fixed multi-section template. The
//! optional language and focus-area annotations are injected at the
//! section anchor before the user's code is substituted, so code that
//! happens to contain the anchor text cannot disturb the template.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject};
use serde::Deserialize;

use super::common::{mirrored_result, parse_params, text_content_output_schema};
use super::ToolDefinition;
use crate::core::schema::FieldSpec;

/// Insertion point for the user's code.
const CODE_PLACEHOLDER: &str = "{CODE}";

/// Section heading the optional annotations are appended to.
const CODE_SECTION_ANCHOR: &str = "## Code to Review";

const TEMPLATE: &str = r#"You are an experienced software engineer. Please review the code below.

## Review Guidelines

Focus your review on the following areas:

1. **Code quality**
   - Readability and clarity
   - Naming conventions
   - Structure and organization

2. **Bugs and potential issues**
   - Logic errors
   - Edge case handling
   - Error handling

3. **Performance**
   - Algorithmic efficiency
   - Unnecessary work
   - Memory usage

4. **Security**
   - Vulnerabilities
   - Input validation
   - Data protection

5. **Maintainability**
   - Reusability
   - Extensibility
   - Documentation

6. **Best practices**
   - Language-specific idioms
   - Design patterns
   - Testability

## Code to Review

```
{CODE}
```

## Review Format

Structure your review as follows:

### ✅ Strengths
- [specific positive observations]

### ⚠️ Issues
- [specific problems and why they matter]

### 🔧 Suggestions
- [concrete improvements, with example code where useful]

### 📝 Overall Assessment
[summary and the highest-priority improvements]"#;

#[derive(Debug, Clone, Deserialize)]
pub struct CodeReviewParams {
    pub code: String,
    pub language: Option<String>,
    pub focus_areas: Option<Vec<String>>,
}

/// Code-review prompt composer implementation.
#[derive(Debug, Clone, Default)]
pub struct CodeReviewPromptTool;

impl CodeReviewPromptTool {
    pub const NAME: &'static str = "code_review_prompt";

    pub const DESCRIPTION: &'static str =
        "Combines a code snippet with a fixed code-review prompt template, \
         optionally annotated with the language and focus areas.";

    pub fn new() -> Self {
        Self
    }

    /// Compose the prompt. Template well-formedness is a programming
    /// invariant, not a runtime condition.
    pub fn execute(params: &CodeReviewParams) -> String {
        debug_assert!(TEMPLATE.contains(CODE_PLACEHOLDER));
        debug_assert!(TEMPLATE.contains(CODE_SECTION_ANCHOR));

        let mut annotations = String::new();
        if let Some(language) = params.language.as_deref().filter(|l| !l.is_empty()) {
            annotations.push_str(&format!("\n**Language**: {}\n", language));
        }
        if let Some(focus) = params.focus_areas.as_deref().filter(|f| !f.is_empty()) {
            annotations.push_str(&format!("\n**Focus areas**: {}\n", focus.join(", ")));
        }

        // Annotations first, then the code, so user code containing the
        // anchor text is never rewritten.
        TEMPLATE
            .replace(
                CODE_SECTION_ANCHOR,
                &format!("{}{}", CODE_SECTION_ANCHOR, annotations),
            )
            .replace(CODE_PLACEHOLDER, &params.code)
    }
}

#[async_trait]
impl ToolDefinition for CodeReviewPromptTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::string("code", "The code to review"),
            FieldSpec::string("language", "Programming language of the code").optional(),
            FieldSpec::string_array(
                "focus_areas",
                "Review areas to emphasize (e.g. security, performance)",
            )
            .optional(),
        ]
    }

    fn output_schema(&self) -> Option<JsonObject> {
        Some(text_content_output_schema("The composed review prompt"))
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        let params: CodeReviewParams = match parse_params(arguments) {
            Ok(params) => params,
            Err(result) => return result,
        };
        mirrored_result(Self::execute(&params))
    }
}
