use serde_json::Value;

use datasmith_core::RecordBatch;

use crate::columns::{column_order, validate_batch};
use crate::errors::EncodingError;

/// Encodes the batch as one `INSERT` statement per record, joined by `\n`.
/// An empty batch encodes to `""`.
///
/// The column list and each value list derive from the same first-record
/// key order, so they stay positionally aligned.
pub fn encode(batch: &RecordBatch, table: &str) -> Result<String, EncodingError> {
    let Some(first) = batch.first() else {
        return Ok(String::new());
    };
    validate_batch(batch)?;

    let columns = column_order(first);
    let column_list = columns.join(", ");

    let mut statements = Vec::with_capacity(batch.len());
    for record in batch {
        let mut values = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = record.get(column).unwrap_or(&Value::Null);
            values.push(literal(value)?);
        }
        statements.push(format!(
            "INSERT INTO \"{table}\" ({column_list}) VALUES ({});",
            values.join(", ")
        ));
    }

    Ok(statements.join("\n"))
}

/// SQL literal for one value: strings quote-escaped, nested values
/// JSON-stringified and treated as strings, numbers and booleans bare.
fn literal(value: &Value) -> Result<String, EncodingError> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Bool(value) => Ok(value.to_string()),
        Value::Number(value) => Ok(value.to_string()),
        Value::String(value) => Ok(quote(value)),
        Value::Array(_) | Value::Object(_) => Ok(quote(&serde_json::to_string(value)?)),
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
