use serde_json::{Map, Value};

/// One synthesized record: field name mapped to a generated value, in the
/// insertion order of the template's `properties` mapping.
///
/// `serde_json` is built with `preserve_order`, so the map keeps keys in the
/// order they were inserted.
pub type Record = Map<String, Value>;

/// An ordered batch of records, all produced from the same template and
/// therefore sharing one field set. The encoders rely on that invariant when
/// they derive columns from the first record.
pub type RecordBatch = Vec<Record>;
