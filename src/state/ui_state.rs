//! The single UI state value owned by the controller

use crate::models::{ContentKind, PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use crate::utils::error::ValidationError;
use std::collections::HashSet;

/// Which panel is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Form,
    Loading,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Transcript,
    AllVideos,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Summary => "Summary",
            Tab::Transcript => "Transcript",
            Tab::AllVideos => "All Videos",
        }
    }
}

/// State of the "Load All Summaries" button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadAllStatus {
    #[default]
    Idle,
    Running,
    Complete,
    Failed,
}

/// What the user is typing and picking on the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub kind: ContentKind,
    pub style: SummaryStyle,
    pub link: String,
    pub persist: bool,
    pub link_error: Option<ValidationError>,
}

impl FormState {
    pub fn new(kind: ContentKind, style: SummaryStyle, persist: bool) -> Self {
        Self {
            kind,
            style,
            persist,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_step: Step,
    pub active_tab: Tab,
    pub form: FormState,
    pub last_request: Option<SummaryRequest>,
    pub last_single: Option<SummaryResult>,
    pub last_batch: Option<PlaylistBatch>,
    pub load_all: LoadAllStatus,
    /// Playlist items showing their full summary
    pub expanded: HashSet<usize>,
    /// Banner shown on the loading panel before the form comes back
    pub banner: Option<String>,
}

impl UiState {
    pub fn is_playlist(&self) -> bool {
        self.last_batch.is_some()
    }

    pub fn loading_message(&self) -> &'static str {
        match self.last_request.as_ref().map(|r| r.kind) {
            Some(ContentKind::Playlist) => "Processing playlist... This may take several minutes.",
            _ => "Fetching video summary...",
        }
    }
}
