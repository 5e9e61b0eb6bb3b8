//! Error types for yt-dlp extraction.

use thiserror::Error;

/// Result type for extractor operations.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Errors that can occur while running yt-dlp.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("yt-dlp not found in PATH")]
    YtDlpNotFound,

    #[error("yt-dlp failed: {message}")]
    CommandFailed {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ExtractorError {
    /// Create a command failure error.
    pub fn command_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::CommandFailed {
            message: message.into(),
            exit_code,
        }
    }
}
