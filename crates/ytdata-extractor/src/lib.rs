//! yt-dlp wrapper for video metadata extraction.
//!
//! Shells out to the yt-dlp binary with `--dump-single-json` and maps the
//! resulting JSON into typed structures. Comments and related videos ride
//! along on the same invocation when requested.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ExtractorConfig, VideoInfoSource, YtDlpClient};
pub use error::{ExtractorError, ExtractorResult};
pub use types::{CommentInfo, ExtractOptions, RelatedEntry, ThumbnailInfo, VideoInfo};
