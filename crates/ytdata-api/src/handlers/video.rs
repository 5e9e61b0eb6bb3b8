//! Metadata, comments and related video handlers.
//!
//! All of these go through yt-dlp in metadata mode. No video data is
//! ever downloaded.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ytdata_extractor::{ExtractOptions, ThumbnailInfo};
use ytdata_models::resolve_video_url;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const RELATED_NOTE: &str = "Related videos availability depends on YouTube's API response";

/// Query parameters for `/metadata`.
#[derive(Debug, Deserialize)]
pub struct MetadataQuery {
    /// YouTube video URL
    pub url: String,
}

/// Video metadata response.
#[derive(Serialize)]
pub struct MetadataResponse {
    pub video_id: String,
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
    pub subscriber_count: Option<u64>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub thumbnails: Vec<ThumbnailInfo>,
    pub webpage_url: Option<String>,
}

/// Get comprehensive video metadata: title, description, counts, channel
/// info, tags, categories and thumbnails.
pub async fn get_metadata(
    State(state): State<AppState>,
    Query(query): Query<MetadataQuery>,
) -> ApiResult<Json<MetadataResponse>> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(video_id = %video, "Fetching metadata");

    let info = state
        .extractor
        .video_info(&video, &ExtractOptions::metadata_only())
        .await
        .map_err(|err| {
            warn!(video_id = %video, error = %err, "Metadata fetch failed");
            ApiError::internal(format!("Error fetching metadata: {}", err))
        })?;

    Ok(Json(MetadataResponse {
        video_id: video.to_string(),
        title: info.title,
        description: info.description,
        duration: info.duration,
        duration_string: info.duration_string,
        view_count: info.view_count,
        like_count: info.like_count,
        upload_date: info.upload_date,
        uploader: info.uploader,
        channel: info.channel,
        channel_id: info.channel_id,
        channel_url: info.channel_url,
        subscriber_count: info.channel_follower_count,
        categories: info.categories.unwrap_or_default(),
        tags: info.tags.unwrap_or_default(),
        thumbnails: info.thumbnails.unwrap_or_default(),
        webpage_url: info.webpage_url,
    }))
}

fn default_max_comments() -> u32 {
    20
}

/// Query parameters for `/comments`.
#[derive(Debug, Deserialize)]
pub struct CommentsQuery {
    /// YouTube video URL
    pub url: String,
    /// Maximum number of comments to fetch
    #[serde(default = "default_max_comments")]
    pub max_comments: u32,
}

/// One comment in the response.
#[derive(Serialize)]
pub struct CommentResponse {
    pub author: Option<String>,
    pub text: Option<String>,
    pub like_count: Option<u64>,
    pub timestamp: Option<i64>,
    pub is_favorited: bool,
    pub parent: String,
}

/// Comments response.
#[derive(Serialize)]
pub struct CommentsResponse {
    pub video_id: String,
    pub total_comments: usize,
    pub comments: Vec<CommentResponse>,
}

/// Fetch comments from a YouTube video.
pub async fn get_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentsQuery>,
) -> ApiResult<Json<CommentsResponse>> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(video_id = %video, max_comments = query.max_comments, "Fetching comments");

    let info = state
        .extractor
        .video_info(&video, &ExtractOptions::with_comments(query.max_comments))
        .await
        .map_err(|err| {
            warn!(video_id = %video, error = %err, "Comment fetch failed");
            ApiError::internal(format!("Error fetching comments: {}", err))
        })?;

    // The extractor arg caps the fetch, but cap again here in case yt-dlp
    // returned more than asked for.
    let mut raw = info.comments.unwrap_or_default();
    raw.truncate(query.max_comments as usize);

    let comments: Vec<CommentResponse> = raw
        .into_iter()
        .map(|comment| CommentResponse {
            author: comment.author,
            text: comment.text,
            like_count: comment.like_count,
            timestamp: comment.timestamp,
            is_favorited: comment.is_favorited.unwrap_or(false),
            parent: comment.parent.unwrap_or_else(|| "root".to_string()),
        })
        .collect();

    Ok(Json(CommentsResponse {
        video_id: video.to_string(),
        total_comments: comments.len(),
        comments,
    }))
}

fn default_related_limit() -> u32 {
    10
}

/// Query parameters for `/related`.
#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    /// YouTube video URL
    pub url: String,
    /// Number of related videos
    #[serde(default = "default_related_limit")]
    pub limit: u32,
}

/// One suggested video.
#[derive(Serialize)]
pub struct RelatedVideo {
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub channel: Option<String>,
    pub duration: Option<u64>,
    pub view_count: Option<u64>,
}

/// Related videos response.
#[derive(Serialize)]
pub struct RelatedVideosResponse {
    pub video_id: String,
    pub related_videos: Vec<RelatedVideo>,
    pub note: &'static str,
}

/// Get related/suggested videos.
///
/// YouTube does not reliably surface suggestions through the extractor,
/// so the list is often empty. The response says as much in its note.
pub async fn get_related_videos(
    State(state): State<AppState>,
    Query(query): Query<RelatedQuery>,
) -> ApiResult<Json<RelatedVideosResponse>> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(video_id = %video, limit = query.limit, "Fetching related videos");

    let info = state
        .extractor
        .video_info(&video, &ExtractOptions::metadata_only())
        .await
        .map_err(|err| {
            warn!(video_id = %video, error = %err, "Related video fetch failed");
            ApiError::internal(format!("Error fetching related videos: {}", err))
        })?;

    let mut entries = info.entries.unwrap_or_default();
    entries.truncate(query.limit as usize);

    let related_videos: Vec<RelatedVideo> = entries
        .into_iter()
        .map(|entry| RelatedVideo {
            video_id: entry.id,
            title: entry.title,
            channel: entry.channel,
            duration: entry.duration,
            view_count: entry.view_count,
        })
        .collect();

    Ok(Json(RelatedVideosResponse {
        video_id: video.to_string(),
        related_videos,
        note: RELATED_NOTE,
    }))
}
