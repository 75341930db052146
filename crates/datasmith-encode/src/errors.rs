use thiserror::Error;

/// Errors emitted while encoding a batch.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A record's field set disagrees with the first record's, so the
    /// first-row column derivation would be wrong for it.
    #[error("records disagree on field sets: {0}")]
    HeterogeneousBatch(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
