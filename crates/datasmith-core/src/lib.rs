//! Core contracts for datasmith.
//!
//! This crate defines the constrained schema dialect, template documents,
//! and the record types shared by the generator and the encoders.

pub mod error;
pub mod record;
pub mod schema;
pub mod template;

pub use error::{Error, Result};
pub use record::{Record, RecordBatch};
pub use schema::SchemaNode;
pub use template::TemplateDocument;
