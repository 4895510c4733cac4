//! TubeSum library

pub mod app;
pub mod gateway;
pub mod gui;
pub mod models;
pub mod playlist;
pub mod render;
pub mod state;
pub mod utils;

// Re-export main types for easier use
pub use gateway::{HttpGateway, SummaryGateway};
pub use gui::{Message, SummarizerApp};
pub use models::{ContentKind, PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
pub use playlist::{BatchJob, OrchestratorEvent, PlaylistOrchestrator, RunOutcome};
pub use state::{Controller, Session};
pub use utils::{AppSettings, SummarizerError};
