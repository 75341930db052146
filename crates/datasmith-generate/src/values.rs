//! Shared value helpers used by the rule chain and the synthesizer.

use chrono::{Duration, SecondsFormat, Utc};
use rand::{Rng, RngCore};

/// Fixed vocabulary sampled for `conditions` array fields.
pub const CONDITIONS: &[&str] = &[
    "Hypertension",
    "Diabetes",
    "Asthma",
    "Arthritis",
    "Migraine",
    "Obesity",
    "Anxiety",
    "Depression",
    "Allergies",
    "Insomnia",
    "High Cholesterol",
    "Chronic Back Pain",
];

/// Formats a v4-shaped UUID from injected randomness.
///
/// Bytes come from the caller's RNG rather than `Uuid::new_v4` so seeded
/// runs stay reproducible.
pub fn random_uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}

/// RFC 3339 timestamp within the past 30 days.
pub fn recent_timestamp(rng: &mut dyn RngCore) -> String {
    let seconds_back = rng.random_range(0..30 * 24 * 60 * 60_i64);
    (Utc::now() - Duration::seconds(seconds_back)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Uniform value in `[min, max]` rounded to 2 decimal places.
pub fn currency(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    round_2dp(rng.random_range(min..=max))
}

pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Plausible catalog code for item `productId` fields.
pub fn catalog_code(rng: &mut dyn RngCore) -> String {
    format!("SKU-{:04}", rng.random_range(1000..=9999))
}

pub fn pick<'a>(values: &'a [&'a str], rng: &mut dyn RngCore) -> &'a str {
    values[rng.random_range(0..values.len())]
}
