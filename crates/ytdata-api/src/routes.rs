//! API routes.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::handlers::full::get_full_data;
use crate::handlers::health::{health, root};
use crate::handlers::transcript::{get_available_languages, get_transcript};
use crate::handlers::video::{get_comments, get_metadata, get_related_videos};
use crate::middleware::request_logging;
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/transcript", get(get_transcript))
        .route("/metadata", get(get_metadata))
        .route("/comments", get(get_comments))
        .route("/related", get(get_related_videos))
        .route("/full", get(get_full_data))
        .route("/languages", get(get_available_languages))
        .route("/health", get(health))
        .layer(middleware::from_fn(request_logging))
        .with_state(state)
}
