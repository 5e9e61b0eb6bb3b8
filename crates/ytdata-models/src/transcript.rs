//! Transcript types.

use serde::{Deserialize, Serialize};

/// One timed caption segment, in playback order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text with markup and entities already stripped.
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Display duration, in seconds.
    pub duration: f64,
}
