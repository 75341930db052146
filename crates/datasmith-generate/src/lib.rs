//! Schema-driven record synthesis for datasmith.
//!
//! This crate walks a [`datasmith_core::TemplateDocument`] and produces
//! plausible records, picking a value generator per field from an ordered
//! rule chain keyed on kind, format, and name heuristics.

pub mod errors;
pub mod rules;
pub mod synthesizer;
pub mod values;

pub use errors::GenerationError;
pub use rules::{FieldContext, RuleSet, StringRule};
pub use synthesizer::RecordSynthesizer;
