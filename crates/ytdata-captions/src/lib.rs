//! YouTube transcript client.
//!
//! Drives YouTube's web player API to list caption tracks and fetch timed
//! transcripts for a video. No media is ever touched; the flow is watch
//! page, player endpoint, then one timed-text document.

pub mod client;
pub mod error;
pub mod types;

pub use client::{CaptionsClient, CaptionsConfig, TranscriptSource};
pub use error::{CaptionsError, CaptionsResult};
pub use types::CaptionTrack;
