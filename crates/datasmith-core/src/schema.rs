use serde_json::Value;

use crate::error::{Error, Result};

/// One node of the constrained schema dialect.
///
/// The dialect recognizes `string`, `integer`, `number`, `array`, and
/// `object` nodes plus optional `format`, `enum`, `minimum`/`maximum`,
/// `items`, and `properties` attributes. Anything outside that set parses
/// into [`SchemaNode::Unsupported`] so the generator can skip the field
/// instead of failing the whole template.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String {
        format: Option<String>,
        enum_values: Option<Vec<String>>,
    },
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    /// Nested structure; property insertion order is preserved.
    Object {
        properties: Vec<(String, SchemaNode)>,
    },
    /// A `type` outside the recognized dialect.
    Unsupported {
        kind: String,
    },
}

impl SchemaNode {
    /// Parses one schema node from its JSON form.
    ///
    /// Structural problems (a non-object node, a non-object `properties`
    /// mapping, an array without `items`) are [`Error::SchemaParse`]; an
    /// unrecognized `type` is not an error here.
    pub fn from_value(value: &Value) -> Result<Self> {
        let Some(node) = value.as_object() else {
            return Err(Error::SchemaParse(format!(
                "schema node must be an object, got {value}"
            )));
        };

        let kind = node.get("type").and_then(Value::as_str);

        // A bare `enum` without `type` is treated as a string enum.
        if kind.is_none() && node.contains_key("enum") {
            return Ok(SchemaNode::String {
                format: None,
                enum_values: parse_enum_values(node.get("enum"))?,
            });
        }

        match kind {
            Some("string") => Ok(SchemaNode::String {
                format: node
                    .get("format")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                enum_values: parse_enum_values(node.get("enum"))?,
            }),
            Some("integer") => Ok(SchemaNode::Integer {
                minimum: node.get("minimum").and_then(Value::as_i64),
                maximum: node.get("maximum").and_then(Value::as_i64),
            }),
            Some("number") => Ok(SchemaNode::Number {
                minimum: node.get("minimum").and_then(Value::as_f64),
                maximum: node.get("maximum").and_then(Value::as_f64),
            }),
            Some("array") => {
                let items = node.get("items").ok_or_else(|| {
                    Error::SchemaParse("array node is missing 'items'".to_string())
                })?;
                Ok(SchemaNode::Array {
                    items: Box::new(SchemaNode::from_value(items)?),
                })
            }
            Some("object") => Ok(SchemaNode::Object {
                properties: parse_properties(node.get("properties"))?,
            }),
            Some(other) => Ok(SchemaNode::Unsupported {
                kind: other.to_string(),
            }),
            None => Ok(SchemaNode::Unsupported {
                kind: "unspecified".to_string(),
            }),
        }
    }

    /// Dialect kind name for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            SchemaNode::String { .. } => "string",
            SchemaNode::Integer { .. } => "integer",
            SchemaNode::Number { .. } => "number",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Object { .. } => "object",
            SchemaNode::Unsupported { kind } => kind,
        }
    }
}

pub(crate) fn parse_properties(value: Option<&Value>) -> Result<Vec<(String, SchemaNode)>> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let Some(map) = value.as_object() else {
        return Err(Error::SchemaParse(
            "'properties' must be an object".to_string(),
        ));
    };

    let mut properties = Vec::with_capacity(map.len());
    for (name, node) in map {
        properties.push((name.clone(), SchemaNode::from_value(node)?));
    }
    Ok(properties)
}

fn parse_enum_values(value: Option<&Value>) -> Result<Option<Vec<String>>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let Some(entries) = value.as_array() else {
        return Err(Error::SchemaParse("'enum' must be an array".to_string()));
    };

    // Non-string literals are dropped here; an enum left empty by that is
    // rejected at generation time.
    Ok(Some(
        entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    ))
}
