//! Service info and health handlers.

use axum::Json;
use serde::Serialize;

/// Root response with the endpoint directory.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
}

/// One line of usage help per endpoint.
#[derive(Serialize)]
pub struct EndpointDirectory {
    pub transcript: &'static str,
    pub metadata: &'static str,
    pub full: &'static str,
    pub comments: &'static str,
    pub related: &'static str,
    pub languages: &'static str,
}

/// API information and usage guide.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "YouTube Data Extractor API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointDirectory {
            transcript: "/transcript - Get video transcript (text or JSON with timestamps)",
            metadata: "/metadata - Get video details (title, description, views, etc.)",
            full: "/full - Get everything (transcript + metadata + comments)",
            comments: "/comments - Get video comments",
            related: "/related - Get related/suggested videos",
            languages: "/languages - Check available transcript languages",
        },
    })
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
