use std::collections::BTreeSet;

use datasmith_core::{Record, RecordBatch};

use crate::errors::EncodingError;

/// Column order for CSV and SQL output, derived from the first record's
/// key order.
///
/// Compatibility quirk carried over from the original templates: when both
/// `lastVisit` and `conditions` are present, their header positions are
/// exchanged. Rows are still emitted by key lookup, so the value/column
/// association is untouched; only the header sequence moves.
pub fn column_order(first: &Record) -> Vec<String> {
    let mut columns: Vec<String> = first.keys().cloned().collect();

    let last_visit = columns.iter().position(|name| name == "lastVisit");
    let conditions = columns.iter().position(|name| name == "conditions");
    if let (Some(a), Some(b)) = (last_visit, conditions) {
        columns.swap(a, b);
    }

    columns
}

/// Checks that every record carries the same field set as the first.
pub fn validate_batch(batch: &RecordBatch) -> Result<(), EncodingError> {
    let Some(first) = batch.first() else {
        return Ok(());
    };
    let expected: BTreeSet<&str> = first.keys().map(String::as_str).collect();

    for (index, record) in batch.iter().enumerate().skip(1) {
        let keys: BTreeSet<&str> = record.keys().map(String::as_str).collect();
        if keys != expected {
            return Err(EncodingError::HeterogeneousBatch(format!(
                "record {index} has fields [{}], expected [{}]",
                join(&keys),
                join(&expected)
            )));
        }
    }
    Ok(())
}

fn join(keys: &BTreeSet<&str>) -> String {
    keys.iter().copied().collect::<Vec<_>>().join(", ")
}
