use thiserror::Error;

/// Errors emitted by the record synthesizer.
///
/// Any error discards the whole batch; a partial batch could disagree with
/// the encoder's first-row column derivation.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The template carries data the generator cannot act on, e.g. an enum
    /// with no usable values or inverted numeric bounds.
    #[error("invalid template: {0}")]
    InvalidTemplate(String),
    /// Unexpected fault during synthesis.
    #[error("generation failed: {0}")]
    Failed(String),
}
