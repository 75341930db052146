//! Batch encoders for datasmith.
//!
//! Consumes already-materialized record batches; never looks at schema
//! internals. Supports JSON, CSV, and SQL INSERT output with a shared
//! column-order derivation.

pub mod columns;
pub mod csv;
pub mod errors;
pub mod json;
pub mod sql;

use std::fmt;
use std::str::FromStr;

use datasmith_core::{RecordBatch, TemplateDocument};

pub use crate::csv::ArrayStyle;
pub use crate::errors::EncodingError;

/// Target serialization format for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Sql => "application/sql",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Sql => "sql",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "sql" => Ok(OutputFormat::Sql),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// A serialized batch plus the transport metadata the boundary layer needs.
#[derive(Debug, Clone)]
pub struct EncodedPayload {
    pub body: String,
    pub content_type: &'static str,
    /// `synthetic-data-<slugified-template-name>.<ext>`.
    pub filename: String,
}

/// Options for encoding; only CSV array flattening is configurable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeOptions {
    pub arrays: ArrayStyle,
}

/// Encodes a batch in the requested format with default options.
pub fn encode(
    batch: &RecordBatch,
    format: OutputFormat,
    template: &TemplateDocument,
) -> Result<EncodedPayload, EncodingError> {
    encode_with(batch, format, template, EncodeOptions::default())
}

pub fn encode_with(
    batch: &RecordBatch,
    format: OutputFormat,
    template: &TemplateDocument,
    options: EncodeOptions,
) -> Result<EncodedPayload, EncodingError> {
    let body = match format {
        OutputFormat::Json => json::encode(batch)?,
        OutputFormat::Csv => csv::encode(batch, options.arrays)?,
        OutputFormat::Sql => sql::encode(batch, &template.table_name())?,
    };

    Ok(EncodedPayload {
        body,
        content_type: format.content_type(),
        filename: format!("synthetic-data-{}.{}", template.slug(), format.extension()),
    })
}
