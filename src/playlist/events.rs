use crate::models::{PlaylistBatch, SummaryResult};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Identifies one orchestrator run; events from other runs are stale
pub type RunId = Uuid;

/// Events that describe progress of a playlist run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrchestratorEvent {
    /// A fetch for this item just started
    ItemLoading { run_id: RunId, index: usize },
    /// The item settled, with its summary or its fetch error
    ItemUpdated {
        run_id: RunId,
        index: usize,
        item: SummaryResult,
    },
}

impl OrchestratorEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            OrchestratorEvent::ItemLoading { run_id, .. }
            | OrchestratorEvent::ItemUpdated { run_id, .. } => *run_id,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OrchestratorEvent::ItemLoading { index, .. }
            | OrchestratorEvent::ItemUpdated { index, .. } => *index,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
    Failed(String),
}

/// Which items a run covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobScope {
    /// Every pending item, throttled
    All,
    /// One item, no throttle
    Item(usize),
}

/// Everything the orchestrator needs for one run
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub run_id: RunId,
    pub batch: PlaylistBatch,
    pub cancel: CancellationToken,
    pub scope: JobScope,
}

impl BatchJob {
    pub fn new(batch: PlaylistBatch, scope: JobScope) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            batch,
            cancel: CancellationToken::new(),
            scope,
        }
    }
}
