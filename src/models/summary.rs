//! Summary results and playlist batches

use crate::models::request::SummaryStyle;

/// Outcome for one video, standalone or inside a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryResult {
    pub success: bool,
    pub id: String,
    pub title: String,
    pub summary_text: Option<String>,
    pub transcript_text: Option<String>,
    pub source_url: Option<String>,
    pub file_path: Option<String>,
    pub error_message: Option<String>,
}

/// Where a result stands from the viewer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState<'a> {
    /// Full summary text is on the client
    Resolved(&'a str),
    /// Known on the server, text not fetched yet
    Placeholder,
    /// Server succeeded but sent neither text nor a file path
    Incomplete,
    /// Client-side fetch failed; can be retried
    LoadFailed(&'a str),
    /// Server-side failure, accepted as final
    Rejected(&'a str),
}

impl SummaryResult {
    /// A successful entry whose text still has to be fetched
    pub fn placeholder(
        id: impl Into<String>,
        title: impl Into<String>,
        file_path: Option<String>,
    ) -> Self {
        Self {
            success: true,
            id: id.into(),
            title: title.into(),
            file_path,
            ..Default::default()
        }
    }

    pub fn resolved(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            id: id.into(),
            title: title.into(),
            summary_text: Some(summary.into()),
            ..Default::default()
        }
    }

    pub fn rejected(
        id: impl Into<String>,
        title: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            id: id.into(),
            title: title.into(),
            error_message: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn state(&self) -> ItemState<'_> {
        if !self.success {
            return ItemState::Rejected(self.error_message.as_deref().unwrap_or("Unknown error"));
        }
        if let Some(summary) = self.summary_text.as_deref() {
            return ItemState::Resolved(summary);
        }
        if let Some(error) = self.error_message.as_deref() {
            return ItemState::LoadFailed(error);
        }
        if self.file_path.is_some() {
            ItemState::Placeholder
        } else {
            ItemState::Incomplete
        }
    }

    /// True while the full summary still has to be fetched
    pub fn needs_fetch(&self) -> bool {
        self.success && self.summary_text.is_none()
    }
}

/// Ordered playlist entries plus the request context they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistBatch {
    pub source_url: String,
    pub video_count: usize,
    pub style: SummaryStyle,
    pub items: Vec<SummaryResult>,
    /// The one item currently being fetched, if any
    pub in_flight: Option<usize>,
}

impl PlaylistBatch {
    pub fn new(source_url: impl Into<String>, style: SummaryStyle, items: Vec<SummaryResult>) -> Self {
        Self {
            source_url: source_url.into(),
            video_count: items.len(),
            style,
            items,
            in_flight: None,
        }
    }

    /// Indices still waiting for their summary, in display order
    pub fn pending_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.needs_fetch())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_loading(&self, index: usize) -> bool {
        self.in_flight == Some(index)
    }

    pub(crate) fn mark_loading(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.in_flight = Some(index);
        true
    }

    pub(crate) fn resolve(&mut self, index: usize, summary: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.summary_text = Some(summary);
            item.error_message = None;
        }
        self.clear_in_flight(index);
    }

    pub(crate) fn fail(&mut self, index: usize, message: String) {
        if let Some(item) = self.items.get_mut(index) {
            item.error_message = Some(message);
        }
        self.clear_in_flight(index);
    }

    /// Overwrite one entry with a snapshot produced elsewhere
    pub(crate) fn replace(&mut self, index: usize, item: SummaryResult) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                self.clear_in_flight(index);
                true
            }
            None => false,
        }
    }

    fn clear_in_flight(&mut self, index: usize) {
        if self.in_flight == Some(index) {
            self.in_flight = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> PlaylistBatch {
        PlaylistBatch::new(
            "https://www.youtube.com/playlist?list=PL1",
            SummaryStyle::Detailed,
            vec![
                SummaryResult::placeholder("a", "First", Some("/tmp/a.txt".into())),
                SummaryResult::rejected("b", "Second", "quota exceeded"),
                SummaryResult::resolved("c", "Third", "done"),
                SummaryResult::placeholder("d", "Fourth", None),
            ],
        )
    }

    #[test]
    fn states_follow_fields() {
        let b = batch();
        assert_eq!(b.items[0].state(), ItemState::Placeholder);
        assert_eq!(b.items[1].state(), ItemState::Rejected("quota exceeded"));
        assert_eq!(b.items[2].state(), ItemState::Resolved("done"));
        assert_eq!(b.items[3].state(), ItemState::Incomplete);
    }

    #[test]
    fn rejected_without_message_reads_unknown() {
        let mut item = SummaryResult::rejected("x", "X", "");
        item.error_message = None;
        assert_eq!(item.state(), ItemState::Rejected("Unknown error"));
    }

    #[test]
    fn pending_skips_resolved_and_rejected() {
        assert_eq!(batch().pending_indices(), vec![0, 3]);
    }

    #[test]
    fn failed_fetch_stays_pending_and_resolve_clears_error() {
        let mut b = batch();
        assert!(b.mark_loading(0));
        assert!(b.is_loading(0));
        b.fail(0, "timeout".into());
        assert_eq!(b.in_flight, None);
        assert_eq!(b.items[0].state(), ItemState::LoadFailed("timeout"));
        assert_eq!(b.pending_indices(), vec![0, 3]);

        b.resolve(0, "text".into());
        assert_eq!(b.items[0].state(), ItemState::Resolved("text"));
        assert_eq!(b.pending_indices(), vec![3]);
    }

    #[test]
    fn mark_loading_out_of_range_is_refused() {
        let mut b = batch();
        assert!(!b.mark_loading(10));
        assert_eq!(b.in_flight, None);
    }
}
