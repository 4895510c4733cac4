//! Pure functions from result snapshots to fragments

use crate::models::{ItemState, PlaylistBatch, SummaryResult};
use crate::render::fragment::{Action, Control, Fragment, FragmentKey, Node};
use crate::state::ui_state::LoadAllStatus;
use crate::utils::config::PREVIEW_CHARS;

pub const NO_CONTENT: &str = "No content available.";
pub const NO_TRANSCRIPT: &str = "No transcript available.";
pub const NO_PLAYLIST_TRANSCRIPT: &str = "Transcript view is not available for playlists.";

/// The "All Videos" tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistView {
    pub load_all: Fragment,
    pub items: Vec<Fragment>,
}

/// Everything the Result step shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub summary: Fragment,
    pub transcript: Fragment,
    pub playlist: Option<PlaylistView>,
}

impl ResultView {
    /// Every tab one after the other, for terminal output
    pub fn to_plain_text(&self, is_expanded: impl Fn(usize) -> bool) -> String {
        let mut sections = vec![
            format!("== Summary ==\n{}", self.summary.visible_text(false)),
            format!("== Transcript ==\n{}", self.transcript.visible_text(false)),
        ];
        if let Some(playlist) = &self.playlist {
            let mut videos = vec![playlist.load_all.visible_text(false)];
            videos.extend(
                playlist
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| item.visible_text(is_expanded(index))),
            );
            sections.push(format!("== All Videos ==\n{}", videos.join("\n\n")));
        }
        sections.join("\n\n")
    }
}

/// Split text into one paragraph per line, or a muted placeholder
pub fn format_content(text: Option<&str>) -> Node {
    match text {
        Some(text) if !text.is_empty() => {
            Node::Paragraphs(text.split('\n').map(|line| line.trim_end_matches('\r').to_string()).collect())
        }
        _ => Node::Muted(NO_CONTENT.to_string()),
    }
}

/// First characters of a summary followed by an ellipsis
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

pub fn render_single(result: &SummaryResult) -> ResultView {
    let mut summary = Fragment::new(FragmentKey::Summary);
    summary.push(format_content(result.summary_text.as_deref()));

    let mut transcript = Fragment::new(FragmentKey::Transcript);
    match result.transcript_text.as_deref() {
        Some(text) if !text.is_empty() => transcript.push(format_content(Some(text))),
        _ => transcript.push(Node::Muted(NO_TRANSCRIPT.to_string())),
    };

    ResultView {
        summary,
        transcript,
        playlist: None,
    }
}

pub fn render_playlist_skeleton(batch: &PlaylistBatch, load_all: LoadAllStatus) -> ResultView {
    let mut summary = Fragment::new(FragmentKey::Summary);
    summary
        .push(Node::Heading(format!("Playlist: {}", batch.source_url)))
        .push(Node::Text(format!("Total videos: {}", batch.video_count)))
        .push(Node::Text(format!("Summary style: {}", batch.style)))
        .push(Node::Text(
            "See individual video summaries in the \"All Videos\" tab.".to_string(),
        ));

    let mut transcript = Fragment::new(FragmentKey::Transcript);
    transcript.push(Node::Muted(NO_PLAYLIST_TRANSCRIPT.to_string()));

    let items = batch
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item(index, item, batch.is_loading(index), false))
        .collect();

    ResultView {
        summary,
        transcript,
        playlist: Some(PlaylistView {
            load_all: render_load_all(load_all, false),
            items,
        }),
    }
}

/// `locked` is set while another run holds the gateway; load buttons then
/// render disabled.
pub fn render_item(index: usize, result: &SummaryResult, loading: bool, locked: bool) -> Fragment {
    let mut fragment = Fragment::new(FragmentKey::Item(index));
    fragment
        .push(Node::Heading(format!("{}. {}", index + 1, result.title)))
        .push(Node::Text(format!("Video ID: {}", result.id)));

    match result.state() {
        ItemState::Resolved(text) => {
            let full = match format_content(Some(text)) {
                Node::Paragraphs(lines) => lines,
                _ => Vec::new(),
            };
            fragment
                .push(Node::Collapsible {
                    preview: preview(text),
                    full,
                })
                .bind(Control::Expand, Action::Expand(index))
                .bind(Control::Collapse, Action::Collapse(index));
        }
        ItemState::Rejected(message) => {
            fragment.push(Node::Error(format!("Error: {}", message)));
        }
        ItemState::Incomplete if loading => {
            fragment.push(Node::Status("Loading summary...".to_string()));
        }
        ItemState::Incomplete => {
            fragment.push(Node::Status("Summary information incomplete".to_string()));
        }
        ItemState::Placeholder | ItemState::LoadFailed(_) if loading => {
            fragment
                .push(Node::Status("Loading summary...".to_string()))
                .button(Control::LoadItem, "Load Summary", false, Action::LoadItem(index));
        }
        ItemState::Placeholder => {
            fragment
                .push(Node::Status("Summary available".to_string()))
                .button(Control::LoadItem, "Load Summary", !locked, Action::LoadItem(index));
        }
        ItemState::LoadFailed(message) => {
            fragment
                .push(Node::Status(format!("Error loading summary: {}", message)))
                .button(Control::LoadItem, "Load Summary", !locked, Action::LoadItem(index));
        }
    }

    fragment
}

pub fn render_load_all(status: LoadAllStatus, locked: bool) -> Fragment {
    let (label, enabled) = match status {
        LoadAllStatus::Idle => ("Load All Summaries", true),
        LoadAllStatus::Running => ("Loading...", false),
        LoadAllStatus::Complete => ("All Summaries Loaded", false),
        LoadAllStatus::Failed => ("Error Loading Summaries", true),
    };
    let mut fragment = Fragment::new(FragmentKey::LoadAll);
    fragment.button(Control::LoadAll, label, enabled && !locked, Action::LoadAll);
    fragment
}

pub fn render_error(message: &str) -> Fragment {
    let mut fragment = Fragment::new(FragmentKey::ErrorBanner);
    fragment.push(Node::Error(format!("Error: {}", message)));
    fragment
}
