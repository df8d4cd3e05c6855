//! # Extraction Error Types

use thiserror::Error;

/// Failures of the free-text extraction service.
///
/// None of these are fatal to the app: the capture flow degrades to the
/// heuristic extractor (see [`crate::FallbackExtractor`]) or to plain
/// manual entry.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The input text was empty; there is nothing to extract.
    #[error("input text is empty")]
    EmptyInput,

    /// The service did not answer within the bounded timeout.
    #[error("extraction timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Transport-level failure (connection, TLS, ...).
    #[error("extraction request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("extraction API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed into an order suggestion.
    #[error("malformed extraction response: {0}")]
    Malformed(String),
}

/// Convenience type alias for Results with ExtractionError.
pub type ExtractionResult<T> = Result<T, ExtractionError>;
