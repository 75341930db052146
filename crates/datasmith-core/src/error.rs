use thiserror::Error;

/// Core error type shared across datasmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A template reference did not resolve to a stored template.
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    /// A template's stored content is not well-formed schema data.
    #[error("invalid template schema: {0}")]
    SchemaParse(String),
}

/// Convenience alias for results returned by datasmith crates.
pub type Result<T> = std::result::Result<T, Error>;
