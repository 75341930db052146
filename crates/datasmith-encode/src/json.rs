use datasmith_core::RecordBatch;

use crate::columns::validate_batch;
use crate::errors::EncodingError;

/// Encodes the batch as a JSON array of records, nested values kept native.
/// An empty batch encodes to `"[]"`.
pub fn encode(batch: &RecordBatch) -> Result<String, EncodingError> {
    validate_batch(batch)?;
    Ok(serde_json::to_string(batch)?)
}
