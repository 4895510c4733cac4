//! Sequential, throttled loading of playlist item summaries

use crate::gateway::SummaryGateway;
use crate::models::PlaylistBatch;
use crate::playlist::events::{BatchJob, JobScope, OrchestratorEvent, RunId, RunOutcome};
use crate::utils::config::THROTTLE_INTERVAL;
use crate::utils::error::ItemError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Walks a batch one item at a time and reports every change as an event
#[derive(Clone)]
pub struct PlaylistOrchestrator {
    gateway: Arc<dyn SummaryGateway>,
    throttle: Duration,
}

/// The event receiver went away mid-run
struct SinkClosed;

impl PlaylistOrchestrator {
    pub fn new(gateway: Arc<dyn SummaryGateway>) -> Self {
        Self {
            gateway,
            throttle: THROTTLE_INTERVAL,
        }
    }

    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Execute one job to the end, or until it is cancelled
    pub async fn run(
        &self,
        job: BatchJob,
        events: UnboundedSender<OrchestratorEvent>,
    ) -> RunOutcome {
        let BatchJob {
            run_id,
            mut batch,
            cancel,
            scope,
        } = job;

        info!(
            "Run {} started on {} via {} ({:?})",
            run_id,
            batch.source_url,
            self.gateway.id(),
            scope
        );

        let outcome = match scope {
            JobScope::All => self.load_all(run_id, &mut batch, &cancel, &events).await,
            JobScope::Item(index) => self.load_item(run_id, &mut batch, index, &cancel, &events).await,
        };

        match &outcome {
            RunOutcome::Completed => info!("Run {} completed", run_id),
            RunOutcome::Cancelled => info!("Run {} cancelled", run_id),
            RunOutcome::Failed(reason) => warn!("Run {} failed: {}", run_id, reason),
        }
        outcome
    }

    /// Fetch every pending item in order, pausing after each one
    pub async fn load_all(
        &self,
        run_id: RunId,
        batch: &mut PlaylistBatch,
        cancel: &CancellationToken,
        events: &UnboundedSender<OrchestratorEvent>,
    ) -> RunOutcome {
        for index in 0..batch.items.len() {
            if !batch.items[index].needs_fetch() {
                continue;
            }
            if cancel.is_cancelled() {
                return RunOutcome::Cancelled;
            }

            if self.resolve(run_id, batch, index, events).await.is_err() {
                return RunOutcome::Failed("event receiver closed".to_string());
            }

            tokio::select! {
                _ = cancel.cancelled() => return RunOutcome::Cancelled,
                _ = tokio::time::sleep(self.throttle) => {}
            }
        }
        RunOutcome::Completed
    }

    /// Fetch a single item, as the per-item button does
    pub async fn load_item(
        &self,
        run_id: RunId,
        batch: &mut PlaylistBatch,
        index: usize,
        cancel: &CancellationToken,
        events: &UnboundedSender<OrchestratorEvent>,
    ) -> RunOutcome {
        let Some(item) = batch.items.get(index) else {
            return RunOutcome::Failed(format!("no item at index {}", index));
        };
        if !item.needs_fetch() {
            debug!("Item {} needs no fetch", index);
            return RunOutcome::Completed;
        }
        if cancel.is_cancelled() {
            return RunOutcome::Cancelled;
        }

        match self.resolve(run_id, batch, index, events).await {
            Ok(()) => RunOutcome::Completed,
            Err(SinkClosed) => RunOutcome::Failed("event receiver closed".to_string()),
        }
    }

    async fn resolve(
        &self,
        run_id: RunId,
        batch: &mut PlaylistBatch,
        index: usize,
        events: &UnboundedSender<OrchestratorEvent>,
    ) -> Result<(), SinkClosed> {
        batch.mark_loading(index);
        events
            .send(OrchestratorEvent::ItemLoading { run_id, index })
            .map_err(|_| SinkClosed)?;

        let item_id = batch.items[index].id.clone();
        debug!("Fetching item {} ({})", index, item_id);

        match self.gateway.fetch_item(&item_id, batch.style).await {
            Ok(summary) => batch.resolve(index, summary),
            Err(e) => {
                let err = ItemError {
                    index,
                    item_id,
                    message: e.message,
                };
                warn!("Failed to load {}", err);
                batch.fail(index, err.message);
            }
        }

        events
            .send(OrchestratorEvent::ItemUpdated {
                run_id,
                index,
                item: batch.items[index].clone(),
            })
            .map_err(|_| SinkClosed)
    }
}
