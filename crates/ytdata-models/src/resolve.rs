//! YouTube URL resolution.
//!
//! Turns heterogeneous YouTube URL shapes into the canonical 11-character
//! video identifier. Shared by every extraction operation.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::video::VideoRef;

/// Errors that can occur during URL resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No known URL pattern yielded a video identifier.
    #[error("no YouTube video ID found in URL")]
    InvalidUrl,
}

/// Result type for URL resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Ordered URL patterns; earlier patterns take precedence.
///
/// The first pattern captures the common `watch?v=` and path-embedded
/// shapes; the later ones are fallbacks for shortened, embed, and legacy
/// player URLs.
fn patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap(),
                Regex::new(r"youtu\.be/([0-9A-Za-z_-]{11})").unwrap(),
                Regex::new(r"embed/([0-9A-Za-z_-]{11})").unwrap(),
                Regex::new(r"v/([0-9A-Za-z_-]{11})").unwrap(),
            ]
        })
        .as_slice()
}

/// Extract the video identifier from a YouTube URL.
///
/// Supported shapes:
/// - `https://youtube.com/watch?v=VIDEO_ID` (any query parameter order)
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`
/// - `https://youtube.com/v/VIDEO_ID`
///
/// Patterns are tried in a fixed order and the first match wins; there is
/// no scoring of "better" matches. Returns [`ResolveError::InvalidUrl`]
/// when nothing matches. No network access is performed.
pub fn resolve_video_url(url: &str) -> ResolveResult<VideoRef> {
    for pattern in patterns() {
        if let Some(caps) = pattern.captures(url) {
            return Ok(VideoRef::from(&caps[1]));
        }
    }

    Err(ResolveError::InvalidUrl)
}
