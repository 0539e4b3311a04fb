use thiserror::Error;

/// Engine-level error type.
///
/// Extraction, scoring, and recommendation are total functions over
/// well-formed text and never return errors; failures only arise at the
/// document-fetch boundary and when loading vocabulary configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Vocabulary config error: {0}")]
    Vocabulary(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
