//! Transcript handlers.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ytdata_captions::{CaptionTrack, CaptionsError};
use ytdata_models::{resolve_video_url, TranscriptSegment};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn default_format() -> String {
    "text".to_string()
}

/// Query parameters for `/transcript`.
#[derive(Debug, Deserialize)]
pub struct TranscriptQuery {
    /// YouTube video URL
    pub url: String,
    /// "text" or "json" with timestamps
    #[serde(default = "default_format")]
    pub format: String,
    /// Language code (e.g. "en", "es")
    pub lang: Option<String>,
}

/// JSON transcript response.
#[derive(Serialize)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub transcript: Vec<TranscriptSegment>,
    pub total_segments: usize,
}

/// Fetch transcript from a YouTube video.
///
/// Returns plain text by default; `format=json` adds per segment timestamps.
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> ApiResult<Response> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(video_id = %video, format = %query.format, lang = ?query.lang, "Fetching transcript");

    let segments = state
        .transcripts
        .fetch(&video, query.lang.as_deref())
        .await
        .map_err(|err| {
            warn!(video_id = %video, error = %err, "Transcript fetch failed");
            transcript_error(err, query.lang.as_deref())
        })?;

    if query.format.eq_ignore_ascii_case("json") {
        let total_segments = segments.len();
        return Ok(Json(TranscriptResponse {
            video_id: video.to_string(),
            transcript: segments,
            total_segments,
        })
        .into_response());
    }

    let full_text = segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(full_text.into_response())
}

/// Map a captions failure onto the `/transcript` status contract.
///
/// The language in the 404 body is the one the caller asked for, or the
/// word "default" when they asked for none.
fn transcript_error(err: CaptionsError, lang: Option<&str>) -> ApiError {
    match err {
        CaptionsError::TranscriptsDisabled => {
            ApiError::not_found("Transcripts disabled for this video")
        }
        CaptionsError::LanguageUnavailable { .. } => ApiError::not_found(format!(
            "No transcript found for language: {}",
            lang.unwrap_or("default")
        )),
        err @ (CaptionsError::ApiKeyNotFound | CaptionsError::Http(_) | CaptionsError::Xml(_)) => {
            ApiError::internal(format!("Error: {}", err))
        }
    }
}

/// Query parameters for `/languages`.
#[derive(Debug, Deserialize)]
pub struct LanguagesQuery {
    /// YouTube video URL
    pub url: String,
}

/// Available languages response.
#[derive(Serialize)]
pub struct LanguagesResponse {
    pub video_id: String,
    pub available_languages: Vec<CaptionTrack>,
}

/// Get available transcript languages for a video.
pub async fn get_available_languages(
    State(state): State<AppState>,
    Query(query): Query<LanguagesQuery>,
) -> ApiResult<Json<LanguagesResponse>> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(video_id = %video, "Listing caption tracks");

    let tracks = state
        .transcripts
        .list(&video)
        .await
        .map_err(|err| {
            warn!(video_id = %video, error = %err, "Caption track listing failed");
            ApiError::internal(format!("Error: {}", err))
        })?;

    Ok(Json(LanguagesResponse {
        video_id: video.to_string(),
        available_languages: tracks,
    }))
}
