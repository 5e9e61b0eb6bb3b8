//! Error types for caption retrieval.

use thiserror::Error;

/// Result type for caption operations.
pub type CaptionsResult<T> = Result<T, CaptionsError>;

/// Errors that can occur while listing or fetching caption tracks.
///
/// The first two variants are the caller-distinguishable "not found"
/// conditions; everything else is an opaque upstream failure.
#[derive(Debug, Error)]
pub enum CaptionsError {
    #[error("no caption tracks available for this video")]
    TranscriptsDisabled,

    #[error("no caption track for language: {language}")]
    LanguageUnavailable { language: String },

    #[error("could not extract player API key from watch page")]
    ApiKeyNotFound,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("caption XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}
