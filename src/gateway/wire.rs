//! JSON payloads exchanged with the summarization API

use crate::models::{PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use crate::utils::error::GatewayError;
use crate::utils::export::extract_video_id;
use crate::utils::validation::is_bare_video_id;
use serde::{Deserialize, Serialize};

/// Returned by `fetch_item` when the server had nothing to say
pub const EMPTY_ITEM_SUMMARY: &str = "No summary content available.";

/// Body of `POST api/summarize/video/`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VideoSummaryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<&'a str>,
    pub style: SummaryStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_to_file: Option<bool>,
}

impl<'a> VideoSummaryBody<'a> {
    /// Bare ids go out as `video_id`, anything else as `video_url`
    pub fn for_request(request: &'a SummaryRequest) -> Self {
        let reference = request.reference.as_str();
        let (video_url, video_id) = if is_bare_video_id(reference) {
            (None, Some(reference))
        } else {
            (Some(reference), None)
        };
        Self {
            video_url,
            video_id,
            style: request.style,
            save_to_file: Some(request.persist),
        }
    }

    pub fn for_item(item_id: &'a str, style: SummaryStyle) -> Self {
        Self {
            video_url: None,
            video_id: Some(item_id),
            style,
            save_to_file: None,
        }
    }
}

/// Body of `POST api/summarize/playlist/`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PlaylistSummaryBody<'a> {
    pub playlist_url: &'a str,
    pub style: SummaryStyle,
    pub save_to_file: bool,
}

impl<'a> PlaylistSummaryBody<'a> {
    pub fn for_request(request: &'a SummaryRequest) -> Self {
        Self {
            playlist_url: &request.reference,
            style: request.style,
            save_to_file: request.persist,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct VideoSummaryResponse {
    pub summary: Option<String>,
    pub transcript: Option<String>,
    pub file_path: Option<String>,
    pub title: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistInfo {
    pub url: String,
    pub video_count: Option<usize>,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistEntry {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub success: bool,
    pub summary: Option<String>,
    pub file_path: Option<String>,
    pub video_url: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistSummaryResponse {
    pub playlist_info: Option<PlaylistInfo>,
    #[serde(default)]
    pub summaries: Vec<PlaylistEntry>,
    pub error: Option<String>,
}

/// Answer of `GET api/summarize/test-connection/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionReport {
    pub status: String,
    pub message: String,
    pub response_code: Option<u16>,
}

impl ConnectionReport {
    pub fn is_ok(&self) -> bool {
        self.status == "success"
    }
}

/// Shape of any error body the server sends
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

impl VideoSummaryResponse {
    pub fn into_result(self, request: &SummaryRequest) -> Result<SummaryResult, GatewayError> {
        if let Some(error) = self.error {
            return Err(GatewayError::new(error));
        }
        if self.summary.is_none() && self.file_path.is_none() {
            return Err(GatewayError::malformed("no summary in response"));
        }

        let id = extract_video_id(&request.reference);
        let source_url = (!is_bare_video_id(&request.reference)).then(|| request.reference.clone());
        Ok(SummaryResult {
            success: true,
            title: self.title.unwrap_or_else(|| request.reference.clone()),
            id,
            summary_text: self.summary,
            transcript_text: self.transcript,
            source_url,
            file_path: self.file_path,
            error_message: None,
        })
    }

    pub fn into_item_text(self) -> Result<String, GatewayError> {
        if let Some(error) = self.error {
            return Err(GatewayError::new(error));
        }
        Ok(self
            .summary
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| EMPTY_ITEM_SUMMARY.to_string()))
    }
}

impl PlaylistEntry {
    fn into_result(self) -> SummaryResult {
        let error_message = if self.success {
            None
        } else {
            Some(self.error.filter(|e| !e.is_empty()).unwrap_or_else(|| "Unknown error".to_string()))
        };
        SummaryResult {
            success: self.success,
            id: self.video_id,
            title: self.title,
            // An empty summary still has to be fetched
            summary_text: self.summary.filter(|s| !s.is_empty()),
            transcript_text: None,
            source_url: self.video_url,
            file_path: self.file_path,
            error_message,
        }
    }
}

impl PlaylistSummaryResponse {
    pub fn into_batch(self, request: &SummaryRequest) -> Result<PlaylistBatch, GatewayError> {
        if let Some(error) = self.error {
            return Err(GatewayError::new(error));
        }
        let info = self
            .playlist_info
            .ok_or_else(|| GatewayError::malformed("missing playlist_info"))?;

        let items: Vec<SummaryResult> = self
            .summaries
            .into_iter()
            .map(PlaylistEntry::into_result)
            .collect();

        let style = info
            .style
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(request.style);

        let mut batch = PlaylistBatch::new(info.url, style, items);
        if let Some(count) = info.video_count {
            batch.video_count = count;
        }
        Ok(batch)
    }
}
