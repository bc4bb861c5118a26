//! Error types for the document extractor

use thiserror::Error;

/// Result type alias for extractor operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Extractor error types
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Could not find JSON object boundaries in input")]
    MalformedInput,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
