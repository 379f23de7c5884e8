//! Declarative input schemas and validation.
//!
//! Every tool describes its input as a list of [`FieldSpec`]s. The same
//! list drives two things:
//!
//! - [`validate`], which turns an untyped argument object into a typed,
//!   defaulted record (or a structured failure list), and
//! - [`to_input_schema`], which renders the JSON Schema object that MCP
//!   clients receive from `tools/list`.
//!
//! Validation accumulates every problem in a single pass rather than
//! short-circuiting, so callers see the complete list of offending
//! fields in declaration order. Unknown input fields are ignored.

use rmcp::model::JsonObject;
use serde::Serialize;
use serde_json::Value;

/// Declarative description of one input field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
    pub required: bool,
    /// Substituted when the field is absent. Only legal on optional
    /// fields; the type must match `kind`.
    pub default: Option<Value>,
}

/// The type and constraints of a field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        integer: bool,
    },
    Boolean,
    /// A string restricted to a fixed set of values.
    Enum(&'static [&'static str]),
    /// A homogeneous array of the given element kind.
    Array(Box<FieldKind>),
    Object,
}

impl FieldKind {
    /// Human-readable type name used in failure messages.
    fn type_name(&self) -> &'static str {
        match self {
            Self::String | Self::Enum(_) => "string",
            Self::Number { integer: true, .. } => "integer",
            Self::Number { .. } => "number",
            Self::Boolean => "boolean",
            Self::Array(_) => "array",
            Self::Object => "object",
        }
    }
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            default: None,
        }
    }

    /// A required string field.
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, FieldKind::String, description)
    }

    /// A required number field.
    pub fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::Number {
                min: None,
                max: None,
                integer: false,
            },
            description,
        )
    }

    /// A required integer field.
    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::Number {
                min: None,
                max: None,
                integer: true,
            },
            description,
        )
    }

    /// A required string field restricted to `values`.
    pub fn enumeration(
        name: &'static str,
        description: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self::new(name, FieldKind::Enum(values), description)
    }

    /// A required array-of-strings field.
    pub fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(
            name,
            FieldKind::Array(Box::new(FieldKind::String)),
            description,
        )
    }

    /// Mark the field optional with no default.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Mark the field optional with a default substituted when absent.
    pub fn with_default(mut self, value: Value) -> Self {
        debug_assert!(
            check_value(&self.kind, &value).is_ok(),
            "default type must match field kind"
        );
        self.required = false;
        self.default = Some(value);
        self
    }

    /// Constrain a numeric field to `min..=max`.
    pub fn range(mut self, lo: f64, hi: f64) -> Self {
        if let FieldKind::Number { min, max, .. } = &mut self.kind {
            *min = Some(lo);
            *max = Some(hi);
        } else {
            debug_assert!(false, "range only applies to numeric fields");
        }
        self
    }
}

/// One offending field reported by [`validate`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldFailure {
    pub field: String,
    pub reason: String,
}

/// The complete, declaration-ordered list of validation problems.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationFailure {
    pub failures: Vec<FieldFailure>,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .failures
            .iter()
            .map(|fail| format!("{}: {}", fail.field, fail.reason))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Invalid arguments: {}", joined)
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate `input` against `schema`.
///
/// On success the returned object carries exactly the declared fields:
/// present values that passed their checks plus defaults for absent
/// optional fields. Unknown input fields are dropped.
pub fn validate(schema: &[FieldSpec], input: &JsonObject) -> Result<JsonObject, ValidationFailure> {
    let mut record = JsonObject::new();
    let mut failures = Vec::new();

    for spec in schema {
        match input.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    failures.push(FieldFailure {
                        field: spec.name.to_string(),
                        reason: "missing required field".to_string(),
                    });
                } else if let Some(default) = &spec.default {
                    record.insert(spec.name.to_string(), default.clone());
                }
            }
            Some(value) => match check_value(&spec.kind, value) {
                Ok(()) => {
                    record.insert(spec.name.to_string(), canonicalize(&spec.kind, value));
                }
                Err(reason) => failures.push(FieldFailure {
                    field: spec.name.to_string(),
                    reason,
                }),
            },
        }
    }

    if failures.is_empty() {
        Ok(record)
    } else {
        Err(ValidationFailure { failures })
    }
}

/// Copy a checked value into canonical form. Integer fields accept
/// integer-valued floats (7.0), which are stored as JSON integers so
/// integer-typed params structs always deserialize.
fn canonicalize(kind: &FieldKind, value: &Value) -> Value {
    if let FieldKind::Number { integer: true, .. } = kind
        && value.as_i64().is_none()
        && value.as_u64().is_none()
        && let Some(n) = value.as_f64()
    {
        return Value::from(n as i64);
    }
    value.clone()
}

/// Check one present value against a kind and its constraints.
fn check_value(kind: &FieldKind, value: &Value) -> Result<(), String> {
    match kind {
        FieldKind::String => {
            if value.is_string() {
                Ok(())
            } else {
                Err(mismatch(kind, value))
            }
        }
        FieldKind::Number { min, max, integer } => {
            let Some(n) = value.as_f64() else {
                return Err(mismatch(kind, value));
            };
            if *integer && n.fract() != 0.0 {
                return Err("must be an integer".to_string());
            }
            if let Some(lo) = min
                && n < *lo
            {
                return Err(format!("must be >= {}", lo));
            }
            if let Some(hi) = max
                && n > *hi
            {
                return Err(format!("must be <= {}", hi));
            }
            Ok(())
        }
        FieldKind::Boolean => {
            if value.is_boolean() {
                Ok(())
            } else {
                Err(mismatch(kind, value))
            }
        }
        FieldKind::Enum(values) => {
            let Some(s) = value.as_str() else {
                return Err(mismatch(kind, value));
            };
            if values.contains(&s) {
                Ok(())
            } else {
                Err(format!("must be one of: {}", values.join(", ")))
            }
        }
        FieldKind::Array(element) => {
            let Some(items) = value.as_array() else {
                return Err(mismatch(kind, value));
            };
            for (i, item) in items.iter().enumerate() {
                if let Err(reason) = check_value(element, item) {
                    return Err(format!("element {}: {}", i, reason));
                }
            }
            Ok(())
        }
        FieldKind::Object => {
            if value.is_object() {
                Ok(())
            } else {
                Err(mismatch(kind, value))
            }
        }
    }
}

fn mismatch(kind: &FieldKind, value: &Value) -> String {
    format!(
        "expected {}, got {}",
        kind.type_name(),
        json_type_name(value)
    )
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a field list as the JSON Schema object MCP clients expect.
pub fn to_input_schema(schema: &[FieldSpec]) -> JsonObject {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for spec in schema {
        let mut prop = kind_schema(&spec.kind);
        prop.insert(
            "description".to_string(),
            Value::String(spec.description.to_string()),
        );
        if let Some(default) = &spec.default {
            prop.insert("default".to_string(), default.clone());
        }
        properties.insert(spec.name.to_string(), Value::Object(prop));
        if spec.required {
            required.push(Value::String(spec.name.to_string()));
        }
    }

    let mut object = JsonObject::new();
    object.insert("type".to_string(), Value::String("object".to_string()));
    object.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        object.insert("required".to_string(), Value::Array(required));
    }
    object
}

fn kind_schema(kind: &FieldKind) -> serde_json::Map<String, Value> {
    let mut prop = serde_json::Map::new();
    match kind {
        FieldKind::String => {
            prop.insert("type".to_string(), Value::String("string".to_string()));
        }
        FieldKind::Number { min, max, integer } => {
            let ty = if *integer { "integer" } else { "number" };
            prop.insert("type".to_string(), Value::String(ty.to_string()));
            if let Some(lo) = min {
                prop.insert("minimum".to_string(), serde_json::json!(lo));
            }
            if let Some(hi) = max {
                prop.insert("maximum".to_string(), serde_json::json!(hi));
            }
        }
        FieldKind::Boolean => {
            prop.insert("type".to_string(), Value::String("boolean".to_string()));
        }
        FieldKind::Enum(values) => {
            prop.insert("type".to_string(), Value::String("string".to_string()));
            prop.insert(
                "enum".to_string(),
                Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()),
            );
        }
        FieldKind::Array(element) => {
            prop.insert("type".to_string(), Value::String("array".to_string()));
            prop.insert("items".to_string(), Value::Object(kind_schema(element)));
        }
        FieldKind::Object => {
            prop.insert("type".to_string(), Value::String("object".to_string()));
        }
    }
    prop
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().expect("test input must be an object").clone()
    }

    fn sample_schema() -> Vec<FieldSpec> {
        vec![
            FieldSpec::string("name", "The name to greet"),
            FieldSpec::enumeration("language", "Greeting language", &["ko", "en", "id"])
                .with_default(json!("en")),
        ]
    }

    #[test]
    fn test_default_substituted_for_absent_optional() {
        let record = validate(&sample_schema(), &obj(json!({ "name": "Ada" }))).unwrap();
        assert_eq!(record.get("name"), Some(&json!("Ada")));
        assert_eq!(record.get("language"), Some(&json!("en")));
    }

    #[test]
    fn test_missing_required_field_listed_exactly() {
        let err = validate(&sample_schema(), &obj(json!({ "language": "ko" }))).unwrap_err();
        assert_eq!(err.failures.len(), 1);
        assert_eq!(err.failures[0].field, "name");
        assert_eq!(err.failures[0].reason, "missing required field");
    }

    #[test]
    fn test_failures_accumulate_in_declaration_order() {
        let err = validate(&sample_schema(), &obj(json!({ "language": "fr" }))).unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert_eq!(err.failures[0].field, "name");
        assert_eq!(err.failures[1].field, "language");
        assert!(err.failures[1].reason.contains("ko, en, id"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let record = validate(
            &sample_schema(),
            &obj(json!({ "name": "Ada", "extra": 42 })),
        )
        .unwrap();
        assert!(!record.contains_key("extra"));
    }

    #[test]
    fn test_type_mismatch_reported() {
        let err = validate(&sample_schema(), &obj(json!({ "name": 3 }))).unwrap_err();
        assert_eq!(err.failures[0].reason, "expected string, got number");
    }

    #[test]
    fn test_integer_bounds() {
        let schema = vec![
            FieldSpec::integer("forecast_days", "Days of forecast")
                .range(1.0, 16.0)
                .with_default(json!(7)),
        ];

        let record = validate(&schema, &obj(json!({}))).unwrap();
        assert_eq!(record.get("forecast_days"), Some(&json!(7)));

        let err = validate(&schema, &obj(json!({ "forecast_days": 17 }))).unwrap_err();
        assert_eq!(err.failures[0].reason, "must be <= 16");

        let err = validate(&schema, &obj(json!({ "forecast_days": 0 }))).unwrap_err();
        assert_eq!(err.failures[0].reason, "must be >= 1");

        let err = validate(&schema, &obj(json!({ "forecast_days": 2.5 }))).unwrap_err();
        assert_eq!(err.failures[0].reason, "must be an integer");
    }

    #[test]
    fn test_integer_valued_float_stored_as_integer() {
        let schema = vec![
            FieldSpec::integer("forecast_days", "Days of forecast")
                .range(1.0, 16.0)
                .with_default(json!(7)),
        ];

        let record = validate(&schema, &obj(json!({ "forecast_days": 7.0 }))).unwrap();
        let value = record.get("forecast_days").unwrap();
        assert!(value.is_i64());
        assert_eq!(value, &json!(7));
    }

    #[test]
    fn test_array_elements_checked() {
        let schema = vec![FieldSpec::string_array("focus_areas", "Review focus").optional()];

        assert!(validate(&schema, &obj(json!({ "focus_areas": ["a", "b"] }))).is_ok());

        let err = validate(&schema, &obj(json!({ "focus_areas": ["a", 1] }))).unwrap_err();
        assert!(err.failures[0].reason.starts_with("element 1"));
    }

    #[test]
    fn test_null_treated_as_absent() {
        let record = validate(&sample_schema(), &obj(json!({ "name": "Ada", "language": null })))
            .unwrap();
        assert_eq!(record.get("language"), Some(&json!("en")));
    }

    #[test]
    fn test_input_schema_rendering() {
        let schema = to_input_schema(&sample_schema());
        assert_eq!(schema.get("type"), Some(&json!("object")));

        let properties = schema.get("properties").and_then(|p| p.as_object()).unwrap();
        assert_eq!(
            properties.get("language").and_then(|p| p.get("enum")),
            Some(&json!(["ko", "en", "id"]))
        );
        assert_eq!(
            properties.get("language").and_then(|p| p.get("default")),
            Some(&json!("en"))
        );
        assert_eq!(schema.get("required"), Some(&json!(["name"])));
    }
}
