//! Combined data handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use ytdata_extractor::ExtractOptions;
use ytdata_models::resolve_video_url;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn default_true() -> bool {
    true
}

fn default_full_max_comments() -> u32 {
    10
}

/// Query parameters for `/full`.
#[derive(Debug, Deserialize)]
pub struct FullQuery {
    /// YouTube video URL
    pub url: String,
    /// Include transcript
    #[serde(default = "default_true")]
    pub include_transcript: bool,
    /// Include comments
    #[serde(default = "default_true")]
    pub include_comments: bool,
    /// Max comments to fetch
    #[serde(default = "default_full_max_comments")]
    pub max_comments: u32,
}

/// Metadata subset served by `/full`.
#[derive(Serialize)]
pub struct FullMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<u64>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub upload_date: Option<String>,
    pub channel: Option<String>,
    pub channel_id: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

/// Comment subset served by `/full`.
#[derive(Serialize)]
pub struct FullComment {
    pub author: Option<String>,
    pub text: Option<String>,
    pub like_count: Option<u64>,
}

/// Combined response. Each section is present only when requested and,
/// for metadata and comments, only when extraction succeeded.
#[derive(Serialize)]
pub struct FullDataResponse {
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FullMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<FullComment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

/// Get complete video data in one request.
///
/// Always answers 200 once the URL resolves. The metadata and transcript
/// sides fail independently: a metadata failure is reported in
/// `metadata_error`, a transcript failure as the literal "Not available".
/// The two fetches run concurrently.
pub async fn get_full_data(
    State(state): State<AppState>,
    Query(query): Query<FullQuery>,
) -> ApiResult<Json<FullDataResponse>> {
    let video = resolve_video_url(&query.url)
        .map_err(|_| ApiError::bad_request("Invalid YouTube URL"))?;

    info!(
        video_id = %video,
        include_transcript = query.include_transcript,
        include_comments = query.include_comments,
        max_comments = query.max_comments,
        "Fetching full video data"
    );

    let metadata_fut = async {
        let options = if query.include_comments {
            ExtractOptions::with_comments(query.max_comments)
        } else {
            ExtractOptions::metadata_only()
        };
        state.extractor.video_info(&video, &options).await
    };

    let transcript_fut = async {
        if !query.include_transcript {
            return None;
        }
        Some(state.transcripts.fetch(&video, None).await)
    };

    let (metadata_result, transcript_result) = tokio::join!(metadata_fut, transcript_fut);

    let mut response = FullDataResponse {
        video_id: video.to_string(),
        metadata: None,
        comments: None,
        metadata_error: None,
        transcript: None,
    };

    match metadata_result {
        Ok(mut info) => {
            if query.include_comments {
                let mut raw = info.comments.take().unwrap_or_default();
                raw.truncate(query.max_comments as usize);
                response.comments = Some(
                    raw.into_iter()
                        .map(|comment| FullComment {
                            author: comment.author,
                            text: comment.text,
                            like_count: comment.like_count,
                        })
                        .collect(),
                );
            }

            response.metadata = Some(FullMetadata {
                title: info.title,
                description: info.description,
                duration: info.duration,
                view_count: info.view_count,
                like_count: info.like_count,
                upload_date: info.upload_date,
                channel: info.channel,
                channel_id: info.channel_id,
                tags: info.tags.unwrap_or_default(),
                categories: info.categories.unwrap_or_default(),
            });
        }
        Err(err) => {
            warn!(video_id = %video, error = %err, "Metadata fetch failed");
            response.metadata_error = Some(err.to_string());
        }
    }

    if let Some(fetched) = transcript_result {
        response.transcript = Some(match fetched {
            Ok(segments) => segments
                .iter()
                .map(|segment| segment.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Err(err) => {
                warn!(video_id = %video, error = %err, "Transcript fetch failed");
                "Not available".to_string()
            }
        });
    }

    Ok(Json(response))
}
