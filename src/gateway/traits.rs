use crate::models::{PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use crate::utils::error::GatewayError;
use async_trait::async_trait;

/// Core trait for talking to the summarization API
///
/// Each call is exactly one request/response exchange. Retrying is the
/// caller's business.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Short identifier used in logs
    fn id(&self) -> &'static str;

    /// Summarize one video
    async fn fetch_single(&self, request: &SummaryRequest) -> Result<SummaryResult, GatewayError>;

    /// Summarize a playlist; entries may come back as placeholders
    async fn fetch_playlist(&self, request: &SummaryRequest) -> Result<PlaylistBatch, GatewayError>;

    /// Fetch the full summary text of one playlist entry
    async fn fetch_item(&self, item_id: &str, style: SummaryStyle) -> Result<String, GatewayError>;
}
