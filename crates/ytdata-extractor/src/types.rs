//! Typed views over the yt-dlp info JSON.
//!
//! yt-dlp emits a large, loosely specified document. These structs pick out
//! the fields the API serves and leave everything else to serde's unknown
//! field handling. Every field is optional because any of them can be
//! missing or null depending on the video.

use serde::{Deserialize, Serialize};

/// Options for a single yt-dlp invocation.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Fetch comments along with the metadata, capped at this count.
    pub comments: Option<u32>,
}

impl ExtractOptions {
    /// Metadata only, no comments.
    pub fn metadata_only() -> Self {
        Self::default()
    }

    /// Metadata plus up to `max` comments.
    pub fn with_comments(max: u32) -> Self {
        Self {
            comments: Some(max),
        }
    }
}

/// Video info as dumped by `yt-dlp --dump-single-json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u64>,
    pub duration_string: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub upload_date: Option<String>,
    pub uploader: Option<String>,
    pub channel: Option<String>,
    pub channel_id: Option<String>,
    pub channel_url: Option<String>,
    /// yt-dlp's name for the subscriber count.
    pub channel_follower_count: Option<u64>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub thumbnails: Option<Vec<ThumbnailInfo>>,
    pub webpage_url: Option<String>,
    /// Present when the run asked for comments.
    pub comments: Option<Vec<CommentInfo>>,
    /// Suggested videos, when the extractor surfaces any.
    pub entries: Option<Vec<RelatedEntry>>,
}

/// One thumbnail variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThumbnailInfo {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One comment from the info JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentInfo {
    pub author: Option<String>,
    pub text: Option<String>,
    pub like_count: Option<u64>,
    pub timestamp: Option<i64>,
    pub is_favorited: Option<bool>,
    /// "root" for top level comments, otherwise the parent comment id.
    pub parent: Option<String>,
}

/// One entry from the suggested videos list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<u64>,
    pub view_count: Option<u64>,
}
