//! Utility modules for error handling, configuration, validation and export

pub mod config;
pub mod error;
pub mod export;
pub mod validation;

// Re-export for convenience
pub use config::{AppSettings, ERROR_DISPLAY_DELAY, PREVIEW_CHARS, THROTTLE_INTERVAL};
pub use error::{GatewayError, ItemError, SummarizerError, ValidationError};
pub use export::{extract_video_id, playlist_export, playlist_id, video_export, ExportFile};
pub use validation::{is_bare_video_id, validate};
