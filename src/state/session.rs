//! Headless driver: runs the controller against a gateway without a window

use crate::gateway::SummaryGateway;
use crate::models::ContentKind;
use crate::playlist::{BatchJob, PlaylistOrchestrator, RunOutcome};
use crate::render::Action;
use crate::state::controller::Controller;
use crate::state::ui_state::Step;
use crate::utils::config::AppSettings;
use crate::utils::error::SummarizerError;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

pub struct Session {
    controller: Controller,
    gateway: Arc<dyn SummaryGateway>,
    orchestrator: PlaylistOrchestrator,
}

impl Session {
    pub fn new(settings: &AppSettings, gateway: Arc<dyn SummaryGateway>) -> Self {
        let orchestrator = PlaylistOrchestrator::new(Arc::clone(&gateway));
        Self {
            controller: Controller::new(settings),
            gateway,
            orchestrator,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Submit the form as it stands. On a gateway failure the error stays
    /// visible for the display delay before the form comes back.
    pub async fn submit(&mut self) -> Result<Step, SummarizerError> {
        let request = self.controller.submit()?;

        let outcome = match request.kind {
            ContentKind::Video => self
                .gateway
                .fetch_single(&request)
                .await
                .map(|result| self.controller.complete_single(result)),
            ContentKind::Playlist => self
                .gateway
                .fetch_playlist(&request)
                .await
                .map(|batch| self.controller.complete_playlist(batch)),
        };

        match outcome {
            Ok(_) => Ok(self.controller.step()),
            Err(e) => {
                let ticket = self.controller.fail_request(&e);
                tokio::time::sleep(ticket.delay).await;
                self.controller.revert(ticket);
                Err(e.into())
            }
        }
    }

    /// Run a job to the end, applying its events as they arrive
    pub async fn run_job(&mut self, job: BatchJob) -> RunOutcome {
        let run_id = job.run_id;
        let (tx, mut rx) = mpsc::unbounded_channel();

        let orchestrator = &self.orchestrator;
        let controller = &mut self.controller;

        let drive = orchestrator.run(job, tx);
        let apply = async {
            while let Some(event) = rx.recv().await {
                controller.apply(event);
            }
        };
        let (outcome, ()) = tokio::join!(drive, apply);

        self.controller.finish_run(run_id, outcome.clone());
        outcome
    }

    /// Press "Load All Summaries"; `None` when the button is not available
    pub async fn load_all(&mut self) -> Option<RunOutcome> {
        let job = self.controller.begin_load_all()?;
        info!("Loading all pending summaries");
        Some(self.run_job(job).await)
    }

    pub async fn load_item(&mut self, index: usize) -> Option<RunOutcome> {
        let job = self.controller.begin_item_load(index)?;
        Some(self.run_job(job).await)
    }

    pub async fn handle_action(&mut self, action: Action) -> Option<RunOutcome> {
        let job = self.controller.handle_action(action)?;
        Some(self.run_job(job).await)
    }

    /// The current result as terminal text. `expand_all` shows every loaded
    /// playlist summary in full instead of its preview.
    pub fn render_text(&self, expand_all: bool) -> Option<String> {
        let view = self.controller.view()?;
        Some(view.to_plain_text(|index| expand_all || self.controller.is_expanded(index)))
    }
}
