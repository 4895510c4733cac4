//! In-memory gateway shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tubesum::models::{PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use tubesum::utils::GatewayError;
use tubesum::SummaryGateway;

/// One `fetch_item` call as the gateway saw it
#[derive(Debug, Clone)]
pub struct ItemCall {
    pub item_id: String,
    pub style: SummaryStyle,
    pub started: Instant,
    pub finished: Instant,
}

/// Answers from a script and records every call
#[derive(Default)]
pub struct ScriptedGateway {
    single: Option<Result<SummaryResult, GatewayError>>,
    playlist: Option<Result<PlaylistBatch, GatewayError>>,
    items: HashMap<String, Result<String, GatewayError>>,
    latency: Duration,
    requests: Mutex<Vec<SummaryRequest>>,
    item_calls: Mutex<Vec<ItemCall>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_single(mut self, result: Result<SummaryResult, GatewayError>) -> Self {
        self.single = Some(result);
        self
    }

    pub fn with_playlist(mut self, result: Result<PlaylistBatch, GatewayError>) -> Self {
        self.playlist = Some(result);
        self
    }

    pub fn with_item(mut self, item_id: &str, result: Result<String, GatewayError>) -> Self {
        self.items.insert(item_id.to_string(), result);
        self
    }

    /// Every call takes this long
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn item_calls(&self) -> Vec<ItemCall> {
        self.item_calls.lock().unwrap().clone()
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.item_calls().into_iter().map(|call| call.item_id).collect()
    }

    async fn wait(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl SummaryGateway for ScriptedGateway {
    fn id(&self) -> &'static str {
        "scripted"
    }

    async fn fetch_single(&self, request: &SummaryRequest) -> Result<SummaryResult, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.wait().await;
        self.single
            .clone()
            .unwrap_or_else(|| Err(GatewayError::new("no single result scripted")))
    }

    async fn fetch_playlist(&self, request: &SummaryRequest) -> Result<PlaylistBatch, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        self.wait().await;
        self.playlist
            .clone()
            .unwrap_or_else(|| Err(GatewayError::new("no playlist scripted")))
    }

    async fn fetch_item(&self, item_id: &str, style: SummaryStyle) -> Result<String, GatewayError> {
        let started = Instant::now();
        self.wait().await;
        self.item_calls.lock().unwrap().push(ItemCall {
            item_id: item_id.to_string(),
            style,
            started,
            finished: Instant::now(),
        });
        self.items
            .get(item_id)
            .cloned()
            .unwrap_or_else(|| Ok(format!("Summary of {}", item_id)))
    }
}

pub fn placeholder(id: &str, title: &str) -> SummaryResult {
    SummaryResult::placeholder(id, title, Some(format!("/srv/summaries/{}.txt", id)))
}

pub fn batch(items: Vec<SummaryResult>) -> PlaylistBatch {
    PlaylistBatch::new(
        "https://www.youtube.com/playlist?list=PLtest",
        SummaryStyle::Detailed,
        items,
    )
}
