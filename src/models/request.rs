//! What the user asked for

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Single video or whole playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Video,
    Playlist,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Video, ContentKind::Playlist];

    /// Label shown on the content-type picker
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Video => "Single Video",
            ContentKind::Playlist => "Playlist",
        }
    }
}

/// Summary style understood by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    Brief,
    #[default]
    Detailed,
    Bullet,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::Brief,
        SummaryStyle::Detailed,
        SummaryStyle::Bullet,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "brief",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Bullet => "bullet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Brief => "Brief",
            SummaryStyle::Detailed => "Detailed",
            SummaryStyle::Bullet => "Bullet Points",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(SummaryStyle::Brief),
            "detailed" => Ok(SummaryStyle::Detailed),
            "bullet" | "bullets" => Ok(SummaryStyle::Bullet),
            other => Err(format!("unknown summary style: {}", other)),
        }
    }
}

/// A validated submission. Built once per submit and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    pub kind: ContentKind,
    pub reference: String,
    pub style: SummaryStyle,
    /// Ask the server to keep a copy on disk
    pub persist: bool,
}

impl SummaryRequest {
    pub fn new(kind: ContentKind, reference: impl Into<String>, style: SummaryStyle) -> Self {
        Self {
            kind,
            reference: reference.into(),
            style,
            persist: true,
        }
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}
