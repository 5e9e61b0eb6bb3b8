//! yt-dlp subprocess client.
//!
//! Every run is metadata only: `--skip-download` is always passed, so no
//! video data ever touches the disk. Comments are folded into the same
//! info JSON via `--write-comments` when requested.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use ytdata_models::VideoRef;

use crate::error::{ExtractorError, ExtractorResult};
use crate::types::{ExtractOptions, VideoInfo};

/// Source of video metadata, comments and related entries.
///
/// The API handlers depend on this trait rather than on the concrete
/// subprocess client so tests can swap in canned responses.
#[async_trait]
pub trait VideoInfoSource: Send + Sync {
    /// Extract the info document for a video.
    async fn video_info(
        &self,
        video: &VideoRef,
        options: &ExtractOptions,
    ) -> ExtractorResult<VideoInfo>;
}

/// Configuration for [`YtDlpClient`].
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// Explicit path to the yt-dlp binary. When unset the binary is
    /// resolved from PATH on each run.
    pub binary: Option<PathBuf>,
}

/// Runs yt-dlp and parses its JSON output.
#[derive(Debug, Clone)]
pub struct YtDlpClient {
    config: ExtractorConfig,
}

impl YtDlpClient {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Resolve the yt-dlp binary, preferring the configured override.
    ///
    /// Resolution happens per run, not at construction, so the service can
    /// start before yt-dlp is installed and report the missing binary only
    /// on the endpoints that need it.
    fn resolve_binary(&self) -> ExtractorResult<PathBuf> {
        match &self.config.binary {
            Some(path) => Ok(path.clone()),
            None => which::which("yt-dlp").map_err(|_| ExtractorError::YtDlpNotFound),
        }
    }

    async fn run(&self, video: &VideoRef, options: &ExtractOptions) -> ExtractorResult<VideoInfo> {
        let binary = self.resolve_binary()?;
        let args = build_args(video, options);

        debug!(video_id = %video, "Running yt-dlp metadata extraction");

        let output = Command::new(&binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);

            let message = stderr.lines().last().unwrap_or("Unknown error");
            return Err(ExtractorError::command_failed(
                message,
                output.status.code(),
            ));
        }

        let info: VideoInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info)
    }
}

#[async_trait]
impl VideoInfoSource for YtDlpClient {
    async fn video_info(
        &self,
        video: &VideoRef,
        options: &ExtractOptions,
    ) -> ExtractorResult<VideoInfo> {
        self.run(video, options).await
    }
}

/// Build the yt-dlp argument list for one extraction.
fn build_args(video: &VideoRef, options: &ExtractOptions) -> Vec<String> {
    let mut args = vec![
        "--dump-single-json".to_string(),
        "--skip-download".to_string(),
        "--no-playlist".to_string(),
        "--no-warnings".to_string(),
        "--quiet".to_string(),
    ];

    if let Some(max) = options.comments {
        args.push("--write-comments".to_string());
        args.push("--extractor-args".to_string());
        args.push(format!("youtube:max_comments={}", max));
    }

    args.push(video.watch_url());
    args
}
