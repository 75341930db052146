use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::{SchemaNode, parse_properties};

/// A stored template: display name plus the root object schema describing
/// one record shape.
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    /// Human-readable display name, e.g. `"Healthcare Patients"`.
    pub name: String,
    /// Root properties in declaration order.
    pub properties: Vec<(String, SchemaNode)>,
    /// Field names flagged as required. Informational only: a downstream
    /// validation hint, never a generation constraint.
    pub required: Vec<String>,
}

impl TemplateDocument {
    /// Parses a template from its stored content (stringified JSON).
    pub fn from_content(name: &str, content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content)
            .map_err(|err| Error::SchemaParse(format!("template content is not JSON: {err}")))?;
        Self::from_root(name, &root)
    }

    /// Builds a template from an already-parsed root schema value.
    pub fn from_root(name: &str, root: &Value) -> Result<Self> {
        let Some(node) = root.as_object() else {
            return Err(Error::SchemaParse(
                "template root must be an object".to_string(),
            ));
        };

        match node.get("type").and_then(Value::as_str) {
            Some("object") | None => {}
            Some(other) => {
                return Err(Error::SchemaParse(format!(
                    "template root must have type 'object', got '{other}'"
                )));
            }
        }

        let properties = parse_properties(node.get("properties"))?;
        let required = node
            .get("required")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            name: name.to_string(),
            properties,
            required,
        })
    }

    /// SQL table identifier derived from the display name: whitespace runs
    /// collapsed to underscores, lower-cased.
    ///
    /// `"E-commerce Orders"` becomes `e-commerce_orders`.
    pub fn table_name(&self) -> String {
        join_on_whitespace(&self.name, "_")
    }

    /// Filename slug: whitespace runs collapsed to `-`, lower-cased.
    pub fn slug(&self) -> String {
        join_on_whitespace(&self.name, "-")
    }
}

fn join_on_whitespace(name: &str, sep: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(sep)
        .to_lowercase()
}
