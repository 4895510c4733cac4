//! Application configuration

use crate::models::{ContentKind, SummaryStyle};
use crate::utils::error::SummarizerError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Pause between two sequential playlist item fetches
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(500);

/// How long a request error stays on screen before the form comes back
pub const ERROR_DISPLAY_DELAY: Duration = Duration::from_millis(3000);

/// Characters shown in a collapsed playlist item
pub const PREVIEW_CHARS: usize = 100;

/// Environment override for the API base URL
pub const API_URL_ENV: &str = "TUBESUM_API_URL";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Root of the summarization service, e.g. `http://127.0.0.1:8000/`
    pub api_base_url: String,

    /// Style preselected on the form
    pub default_style: SummaryStyle,

    /// Content type preselected on the form
    pub default_kind: ContentKind,

    /// Ask the server to keep summaries on disk
    pub save_to_file: bool,

    /// Cookie holding the anti-forgery token
    pub csrf_cookie: String,

    /// Token to seed the cookie store with, when the server never sets one
    pub csrf_token: Option<String>,

    /// Where exported summaries go by default
    pub export_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000/".to_string(),
            default_style: SummaryStyle::Detailed,
            default_kind: ContentKind::Video,
            save_to_file: true,
            csrf_cookie: "csrftoken".to_string(),
            csrf_token: None,
            export_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from("./downloads")),
        }
    }
}

impl AppSettings {
    /// Default location of the settings file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tubesum")
            .join("settings.json")
    }

    /// Load from the default file (if any), then apply the environment
    pub fn load() -> Result<Self, SummarizerError> {
        let path = Self::default_path();
        let mut settings = if path.exists() {
            Self::load_from(&path)?
        } else {
            debug!("No settings file at {}, using defaults", path.display());
            Self::default()
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            info!("Using API URL from {}", API_URL_ENV);
            settings.api_base_url = url;
        }

        settings.normalized()
    }

    pub fn load_from(path: &Path) -> Result<Self, SummarizerError> {
        let content = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&content)?;
        settings.normalized()
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SummarizerError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Enforce a usable base URL: non-empty, http(s), trailing slash
    pub fn normalized(mut self) -> Result<Self, SummarizerError> {
        let trimmed = self.api_base_url.trim();
        if trimmed.is_empty() {
            return Err(SummarizerError::Config("api_base_url is empty".to_string()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(SummarizerError::Config(format!(
                "api_base_url must start with http:// or https://, got {}",
                trimmed
            )));
        }

        let mut url = trimmed.to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.api_base_url = url;

        if self.csrf_cookie.trim().is_empty() {
            self.csrf_cookie = "csrftoken".to_string();
        }
        Ok(self)
    }
}
