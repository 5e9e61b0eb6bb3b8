//! Caption track metadata.

use serde::Serialize;

/// One available caption track for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionTrack {
    /// Human-readable track name, e.g. "English (auto-generated)".
    pub language: String,
    /// BCP-47-ish language code, e.g. "en".
    pub language_code: String,
    /// True for tracks produced by automated captioning.
    pub is_generated: bool,
    pub is_translatable: bool,
}
