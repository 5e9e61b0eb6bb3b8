//! Shared data models for the ytdata service.
//!
//! This crate provides the types every other crate agrees on:
//! - The resolved video identifier and the URL resolver that produces it
//! - Timed transcript segments

pub mod resolve;
pub mod transcript;
pub mod video;

// Re-export common types
pub use resolve::{resolve_video_url, ResolveError, ResolveResult};
pub use transcript::TranscriptSegment;
pub use video::VideoRef;
