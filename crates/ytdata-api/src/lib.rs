//! Axum HTTP API server.
//!
//! This crate provides:
//! - Transcript fetching in plain text or JSON form
//! - Video metadata, comments and related videos via yt-dlp
//! - A combined endpoint that aggregates all of the above
//!
//! No endpoint ever downloads video files.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
