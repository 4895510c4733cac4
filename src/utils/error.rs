//! Error handling for tubesum

use thiserror::Error;

/// Main error type for tubesum
#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Summary request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Nothing to export yet")]
    NothingToExport,
}

/// Why a submitted reference was refused before any request was made.
///
/// The `Display` text is what the form shows under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a YouTube link")]
    Missing,

    #[error("Please enter a valid YouTube link")]
    Malformed,
}

impl ValidationError {
    /// Short machine-readable reason
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::Missing => "missing",
            ValidationError::Malformed => "malformed",
        }
    }
}

/// Failure of a single exchange with the summarization API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
    /// HTTP status when the server answered at all
    pub status: Option<u16>,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
        }
    }

    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("Malformed response: {}", detail))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        Self {
            message: format!("Network error: {}", err),
            status,
        }
    }
}

/// One playlist item could not be fetched; siblings are unaffected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item {index} ({item_id}): {message}")]
pub struct ItemError {
    pub index: usize,
    pub item_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_form_text() {
        assert_eq!(
            ValidationError::Missing.to_string(),
            "Please enter a YouTube link"
        );
        assert_eq!(
            ValidationError::Malformed.to_string(),
            "Please enter a valid YouTube link"
        );
        assert_eq!(ValidationError::Missing.reason(), "missing");
        assert_eq!(ValidationError::Malformed.reason(), "malformed");
    }

    #[test]
    fn gateway_error_displays_bare_message() {
        let err = GatewayError::with_status("quota exceeded", 429);
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(err.status, Some(429));

        let wrapped: SummarizerError = err.into();
        assert_eq!(wrapped.to_string(), "Summary request failed: quota exceeded");
    }
}
