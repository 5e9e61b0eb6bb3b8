//! Application state.

use std::sync::Arc;

use ytdata_captions::{CaptionsClient, CaptionsConfig, TranscriptSource};
use ytdata_extractor::{ExtractorConfig, VideoInfoSource, YtDlpClient};

use crate::config::ApiConfig;

/// Shared application state.
///
/// The data sources are trait objects so tests can swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub transcripts: Arc<dyn TranscriptSource>,
    pub extractor: Arc<dyn VideoInfoSource>,
}

impl AppState {
    /// Create application state with the default clients.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let transcripts = CaptionsClient::new(CaptionsConfig::default())?;
        let extractor = YtDlpClient::new(ExtractorConfig::default());

        Ok(Self {
            config,
            transcripts: Arc::new(transcripts),
            extractor: Arc::new(extractor),
        })
    }

    /// Create application state with explicit data sources.
    pub fn with_sources(
        config: ApiConfig,
        transcripts: Arc<dyn TranscriptSource>,
        extractor: Arc<dyn VideoInfoSource>,
    ) -> Self {
        Self {
            config,
            transcripts,
            extractor,
        }
    }
}
