use serde_json::Value;

use datasmith_core::RecordBatch;

use crate::columns::{column_order, validate_batch};
use crate::errors::EncodingError;

/// How array-valued fields are flattened into a CSV cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrayStyle {
    /// JSON-stringify the array, double inner quotes, wrap the cell in
    /// double quotes. The canonical style.
    #[default]
    Nested,
    /// Flatten scalar arrays to a bare comma-joined string, matching the
    /// older output of the original implementation.
    Joined,
}

/// Encodes the batch as CSV text: one header row, one row per record, rows
/// joined by `\n`, no trailing newline. An empty batch encodes to `""`.
pub fn encode(batch: &RecordBatch, arrays: ArrayStyle) -> Result<String, EncodingError> {
    let Some(first) = batch.first() else {
        return Ok(String::new());
    };
    validate_batch(batch)?;

    let columns = column_order(first);
    let mut lines = Vec::with_capacity(batch.len() + 1);
    lines.push(columns.join(","));

    for record in batch {
        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = record.get(column).unwrap_or(&Value::Null);
            cells.push(cell_text(value, arrays)?);
        }
        lines.push(cells.join(","));
    }

    Ok(lines.join("\n"))
}

/// Scalars are emitted bare; arrays and objects are JSON-stringified with
/// doubled inner quotes and wrapped in double quotes (reversible escaping).
fn cell_text(value: &Value, arrays: ArrayStyle) -> Result<String, EncodingError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(value) => Ok(value.to_string()),
        Value::Number(value) => Ok(value.to_string()),
        Value::String(value) => Ok(value.clone()),
        Value::Array(items)
            if arrays == ArrayStyle::Joined && items.iter().all(is_scalar) =>
        {
            let joined: Vec<String> = items.iter().map(scalar_text).collect();
            Ok(joined.join(", "))
        }
        Value::Array(_) | Value::Object(_) => {
            let json = serde_json::to_string(value)?;
            Ok(format!("\"{}\"", json.replace('"', "\"\"")))
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}
