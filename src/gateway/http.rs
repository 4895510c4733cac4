//! `reqwest`-backed gateway to the summarization service

use crate::gateway::csrf::{token_for, CSRF_HEADER};
use crate::gateway::traits::SummaryGateway;
use crate::gateway::wire::{
    ConnectionReport, ErrorBody, PlaylistSummaryBody, PlaylistSummaryResponse, VideoSummaryBody,
    VideoSummaryResponse,
};
use crate::models::{PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use crate::utils::config::AppSettings;
use crate::utils::error::GatewayError;
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

const VIDEO_PATH: &str = "api/summarize/video/";
const PLAYLIST_PATH: &str = "api/summarize/playlist/";
const TEST_CONNECTION_PATH: &str = "api/summarize/test-connection/";

/// HTTP gateway with a shared cookie store for the anti-forgery token
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    cookies: Arc<Jar>,
    csrf_cookie: String,
}

impl HttpGateway {
    /// Build a gateway for the service at `settings.api_base_url`
    pub fn new(settings: &AppSettings) -> Result<Self, GatewayError> {
        let base_url: Url = settings
            .api_base_url
            .parse()
            .map_err(|e| GatewayError::new(format!("Invalid API URL {}: {}", settings.api_base_url, e)))?;

        let cookies = Arc::new(Jar::default());
        if let Some(token) = &settings.csrf_token {
            cookies.add_cookie_str(&format!("{}={}; Path=/", settings.csrf_cookie, token), &base_url);
        }

        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .build()?;

        Ok(Self {
            client,
            base_url,
            cookies,
            csrf_cookie: settings.csrf_cookie.clone(),
        })
    }

    /// Load the base page once so the server can hand out its token cookie
    pub async fn prime(&self) -> Result<(), GatewayError> {
        let response = self.client.get(self.base_url.clone()).send().await?;
        debug!("Primed cookie store from {} ({})", self.base_url, response.status());
        if self.csrf_token().is_none() {
            warn!("Server did not set a {} cookie", self.csrf_cookie);
        }
        Ok(())
    }

    /// Ask the service whether its upstream API is reachable
    pub async fn check_connection(&self) -> Result<ConnectionReport, GatewayError> {
        let url = self.endpoint(TEST_CONNECTION_PATH)?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The endpoint reports failures with a 4xx/5xx and the same body shape
        serde_json::from_str::<ConnectionReport>(&body).map_err(|e| {
            if status.is_success() {
                GatewayError::malformed(e)
            } else {
                GatewayError::with_status(
                    format!("Connection check failed (status {})", status.as_u16()),
                    status.as_u16(),
                )
            }
        })
    }

    /// Current anti-forgery token, if the cookie store has one
    pub fn csrf_token(&self) -> Option<String> {
        token_for(&self.cookies, &self.base_url, &self.csrf_cookie)
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::new(format!("Invalid endpoint {}: {}", path, e)))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let mut request = self.client.post(url).json(body);
        match self.csrf_token() {
            Some(token) => request = request.header(CSRF_HEADER, token),
            None => debug!("No {} cookie; sending {} without token", self.csrf_cookie, path),
        }

        debug!("POST {}", path);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| format!("Failed to fetch summary (status {})", status.as_u16()));
            warn!("POST {} returned {}: {}", path, status, message);
            return Err(GatewayError::with_status(message, status.as_u16()));
        }

        serde_json::from_str(&text).map_err(GatewayError::malformed)
    }
}

#[async_trait]
impl SummaryGateway for HttpGateway {
    fn id(&self) -> &'static str {
        "http"
    }

    async fn fetch_single(&self, request: &SummaryRequest) -> Result<SummaryResult, GatewayError> {
        info!("Requesting {} summary for {}", request.style, request.reference);
        let response: VideoSummaryResponse = self
            .post_json(VIDEO_PATH, &VideoSummaryBody::for_request(request))
            .await?;
        response.into_result(request)
    }

    async fn fetch_playlist(&self, request: &SummaryRequest) -> Result<PlaylistBatch, GatewayError> {
        info!("Requesting {} playlist summary for {}", request.style, request.reference);
        let response: PlaylistSummaryResponse = self
            .post_json(PLAYLIST_PATH, &PlaylistSummaryBody::for_request(request))
            .await?;
        let batch = response.into_batch(request)?;
        info!(
            "Playlist {} returned {} entries ({} pending)",
            batch.source_url,
            batch.items.len(),
            batch.pending_indices().len()
        );
        Ok(batch)
    }

    async fn fetch_item(&self, item_id: &str, style: SummaryStyle) -> Result<String, GatewayError> {
        let response: VideoSummaryResponse = self
            .post_json(VIDEO_PATH, &VideoSummaryBody::for_item(item_id, style))
            .await?;
        response.into_item_text()
    }
}
