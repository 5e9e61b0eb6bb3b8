//! Video identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved 11-character YouTube video identifier.
///
/// Produced by [`crate::resolve::resolve_video_url`]; carries no proof that
/// the video actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoRef(String);

impl VideoRef {
    /// Get the inner identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch-page URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VideoRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VideoRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
