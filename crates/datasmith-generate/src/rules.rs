//! Ordered rule chain for `string` fields.
//!
//! Dispatch is an explicit list of (predicate, generator) pairs evaluated
//! top to bottom; the first matching rule wins. Registration order in
//! [`RuleSet::standard`] is the precedence contract.

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use rand::{Rng, RngCore};
use serde_json::Value;

use crate::errors::GenerationError;
use crate::values::{pick, random_uuid, recent_timestamp};

/// Everything a string rule may inspect about the field it is generating.
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Field name as declared in the template.
    pub name: &'a str,
    /// Lower-cased name for substring matching.
    pub lower_name: &'a str,
    pub format: Option<&'a str>,
    pub enum_values: Option<&'a [String]>,
}

/// One guarded variant of the string dispatch.
pub trait StringRule {
    fn id(&self) -> &'static str;
    fn matches(&self, ctx: &FieldContext<'_>) -> bool;
    fn generate(
        &self,
        ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError>;
}

/// The rule chain, evaluated in registration order.
pub struct RuleSet {
    rules: Vec<Box<dyn StringRule + Send + Sync>>,
}

impl RuleSet {
    /// Builds the standard chain in precedence order. The final prose rule
    /// matches unconditionally.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Box::new(UuidRule),
                Box::new(DateTimeRule),
                Box::new(EnumRule),
                Box::new(PersonNameRule),
                Box::new(GenderRule),
                Box::new(EmailRule),
                Box::new(CompanyRule),
                Box::new(CityRule),
                Box::new(BloodPressureRule),
                Box::new(SentenceRule),
            ],
        }
    }

    pub fn generate(
        &self,
        ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        for rule in &self.rules {
            if rule.matches(ctx) {
                return rule.generate(ctx, rng);
            }
        }
        Err(GenerationError::Failed(format!(
            "no string rule matched field '{}'",
            ctx.name
        )))
    }

    pub fn rules(&self) -> impl Iterator<Item = &(dyn StringRule + Send + Sync)> {
        self.rules.iter().map(Box::as_ref)
    }
}

struct UuidRule;

impl StringRule for UuidRule {
    fn id(&self) -> &'static str {
        "string.uuid"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.format == Some("uuid") || ctx.lower_name.contains("id")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(random_uuid(rng)))
    }
}

struct DateTimeRule;

impl StringRule for DateTimeRule {
    fn id(&self) -> &'static str {
        "string.date_time"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.format == Some("date-time")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(recent_timestamp(rng)))
    }
}

struct EnumRule;

impl StringRule for EnumRule {
    fn id(&self) -> &'static str {
        "string.enum"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.enum_values.is_some()
    }

    fn generate(
        &self,
        ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let values = ctx.enum_values.unwrap_or_default();
        if values.is_empty() {
            return Err(GenerationError::InvalidTemplate(format!(
                "enum for field '{}' has no usable values",
                ctx.name
            )));
        }
        let value = &values[rng.random_range(0..values.len())];
        Ok(Value::String(value.clone()))
    }
}

struct PersonNameRule;

impl StringRule for PersonNameRule {
    fn id(&self) -> &'static str {
        "string.person_name"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name.contains("name") || ctx.lower_name.contains("title")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(Name().fake_with_rng(rng)))
    }
}

struct GenderRule;

impl StringRule for GenderRule {
    fn id(&self) -> &'static str {
        "string.gender"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name.contains("gender")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(
            pick(&["Male", "Female", "Other"], rng).to_string(),
        ))
    }
}

struct EmailRule;

impl StringRule for EmailRule {
    fn id(&self) -> &'static str {
        "string.email"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name.contains("email")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(SafeEmail().fake_with_rng(rng)))
    }
}

struct CompanyRule;

impl StringRule for CompanyRule {
    fn id(&self) -> &'static str {
        "string.company"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name == "merchant" || ctx.lower_name.contains("organization")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(CompanyName().fake_with_rng(rng)))
    }
}

struct CityRule;

impl StringRule for CityRule {
    fn id(&self) -> &'static str {
        "string.city"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name.contains("location") || ctx.lower_name.contains("address")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(CityName().fake_with_rng(rng)))
    }
}

struct BloodPressureRule;

impl StringRule for BloodPressureRule {
    fn id(&self) -> &'static str {
        "string.blood_pressure"
    }

    fn matches(&self, ctx: &FieldContext<'_>) -> bool {
        ctx.lower_name.contains("bloodpressure")
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        let systolic = rng.random_range(90..=140);
        let diastolic = rng.random_range(60..=90);
        Ok(Value::String(format!("{systolic}/{diastolic}")))
    }
}

struct SentenceRule;

impl StringRule for SentenceRule {
    fn id(&self) -> &'static str {
        "string.sentence"
    }

    fn matches(&self, _ctx: &FieldContext<'_>) -> bool {
        true
    }

    fn generate(
        &self,
        _ctx: &FieldContext<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<Value, GenerationError> {
        Ok(Value::String(Sentence(4..10).fake_with_rng(rng)))
    }
}
