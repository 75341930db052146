use rand::{Rng, RngCore};
use serde_json::Value;
use tracing::{debug, info, warn};

use datasmith_core::{Record, RecordBatch, SchemaNode, TemplateDocument};

use crate::errors::GenerationError;
use crate::rules::{FieldContext, RuleSet};
use crate::values::{CONDITIONS, catalog_code, currency};

/// Default bounds when an `integer` node omits `minimum`/`maximum`.
const DEFAULT_INT_MIN: i64 = 0;
const DEFAULT_INT_MAX: i64 = 1000;
/// Default bounds for non-currency `number` nodes.
const DEFAULT_NUMBER_MIN: f64 = 0.0;
const DEFAULT_NUMBER_MAX: f64 = 10000.0;

/// Name fragments that mark a `number` field as currency-like.
const CURRENCY_HINTS: &[&str] = &["amount", "total", "price", "budget"];

/// Walks a template's properties and synthesizes one record per call.
///
/// Pure with respect to the template; all randomness comes from the injected
/// RNG, so callers own reproducibility.
pub struct RecordSynthesizer {
    rules: RuleSet,
}

impl Default for RecordSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSynthesizer {
    pub fn new() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }

    /// Synthesizes one record. Fields with an unsupported kind are omitted
    /// (deliberate policy, logged at `warn`), never a failure.
    pub fn generate(
        &self,
        template: &TemplateDocument,
        rng: &mut dyn RngCore,
    ) -> Result<Record, GenerationError> {
        self.record_for(&template.properties, rng)
    }

    /// Synthesizes `count` independent records in order. Any failure
    /// discards the whole batch.
    pub fn generate_batch(
        &self,
        template: &TemplateDocument,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<RecordBatch, GenerationError> {
        info!(template = %template.name, count, "generating batch");
        let mut batch = Vec::with_capacity(count);
        for _ in 0..count {
            batch.push(self.generate(template, rng)?);
        }
        debug!(template = %template.name, records = batch.len(), "batch complete");
        Ok(batch)
    }

    fn record_for(
        &self,
        properties: &[(String, SchemaNode)],
        rng: &mut dyn RngCore,
    ) -> Result<Record, GenerationError> {
        let mut record = Record::new();
        for (name, node) in properties {
            match self.value_for(name, node, rng)? {
                Some(value) => {
                    record.insert(name.clone(), value);
                }
                None => {
                    warn!(field = %name, kind = node.kind(), "skipping field with unsupported kind");
                }
            }
        }
        Ok(record)
    }

    /// Dispatch keyed first on kind, then format/name heuristics.
    /// `Ok(None)` means the field's kind is unsupported and the field is
    /// dropped from the record.
    fn value_for(
        &self,
        name: &str,
        node: &SchemaNode,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Value>, GenerationError> {
        let lower = name.to_lowercase();
        match node {
            SchemaNode::String {
                format,
                enum_values,
            } => {
                let ctx = FieldContext {
                    name,
                    lower_name: &lower,
                    format: format.as_deref(),
                    enum_values: enum_values.as_deref(),
                };
                self.rules.generate(&ctx, rng).map(Some)
            }
            SchemaNode::Integer { minimum, maximum } => {
                let min = minimum.unwrap_or(DEFAULT_INT_MIN);
                let max = maximum.unwrap_or(DEFAULT_INT_MAX);
                if min > max {
                    return Err(GenerationError::InvalidTemplate(format!(
                        "integer field '{name}' has minimum {min} > maximum {max}"
                    )));
                }
                Ok(Some(Value::from(rng.random_range(min..=max))))
            }
            SchemaNode::Number { minimum, maximum } => {
                if CURRENCY_HINTS.iter().any(|hint| lower.contains(hint)) {
                    return Ok(Some(Value::from(currency(rng, 10.0, 1000.0))));
                }
                let min = minimum.unwrap_or(DEFAULT_NUMBER_MIN);
                let max = maximum.unwrap_or(DEFAULT_NUMBER_MAX);
                if min > max {
                    return Err(GenerationError::InvalidTemplate(format!(
                        "number field '{name}' has minimum {min} > maximum {max}"
                    )));
                }
                Ok(Some(Value::from(rng.random_range(min..=max))))
            }
            SchemaNode::Array { items } => self.array_value(name, &lower, items, rng).map(Some),
            SchemaNode::Object { properties } => {
                if lower.contains("location") {
                    return Ok(Some(geo_point(rng)));
                }
                self.record_for(properties, rng)
                    .map(|record| Some(Value::Object(record)))
            }
            SchemaNode::Unsupported { .. } => Ok(None),
        }
    }

    fn array_value(
        &self,
        name: &str,
        lower_name: &str,
        items: &SchemaNode,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        match items {
            SchemaNode::String { .. } if lower_name.contains("conditions") => {
                let count = rng.random_range(1..=3);
                let picks = rand::seq::index::sample(rng, CONDITIONS.len(), count);
                Ok(Value::Array(
                    picks
                        .iter()
                        .map(|index| Value::String(CONDITIONS[index].to_string()))
                        .collect(),
                ))
            }
            SchemaNode::String { .. } => {
                use fake::Fake;
                use fake::faker::lorem::en::Word;
                let count = rng.random_range(1..=3);
                Ok(Value::Array(
                    (0..count)
                        .map(|_| Value::String(Word().fake_with_rng(rng)))
                        .collect(),
                ))
            }
            SchemaNode::Object { properties } => {
                let count = rng.random_range(1..=5);
                let mut records = Vec::with_capacity(count);
                for _ in 0..count {
                    records.push(Value::Object(self.item_record(properties, rng)?));
                }
                Ok(Value::Array(records))
            }
            other => {
                // Scalar item kinds recurse element by element; unsupported
                // item kinds yield an empty array.
                let count = rng.random_range(1..=3);
                let mut elements = Vec::new();
                for _ in 0..count {
                    if let Some(value) = self.value_for(name, other, rng)? {
                        elements.push(value);
                    }
                }
                Ok(Value::Array(elements))
            }
        }
    }

    /// Nested order-item record. `productId`, `quantity`, and `price` get
    /// catalog-shaped values; everything else goes through the normal rules.
    fn item_record(
        &self,
        properties: &[(String, SchemaNode)],
        rng: &mut dyn RngCore,
    ) -> Result<Record, GenerationError> {
        let mut record = Record::new();
        for (name, node) in properties {
            let value = match name.to_lowercase().as_str() {
                "productid" => Some(Value::String(catalog_code(rng))),
                "quantity" => Some(Value::from(rng.random_range(1..=10_i64))),
                "price" => Some(Value::from(currency(rng, 1.0, 500.0))),
                _ => self.value_for(name, node, rng)?,
            };
            if let Some(value) = value {
                record.insert(name.clone(), value);
            }
        }
        Ok(record)
    }
}

/// `{lat, lon}` pair inside valid coordinate ranges.
fn geo_point(rng: &mut dyn RngCore) -> Value {
    let lat = round_6dp(rng.random_range(-90.0..=90.0));
    let lon = round_6dp(rng.random_range(-180.0..=180.0));
    let mut point = Record::new();
    point.insert("lat".to_string(), Value::from(lat));
    point.insert("lon".to_string(), Value::from(lon));
    Value::Object(point)
}

fn round_6dp(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
