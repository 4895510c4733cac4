//! UI step controller: every mutation of `UiState` goes through here and
//! re-renders the part of the view it touched.

use crate::models::{ContentKind, PlaylistBatch, SummaryRequest, SummaryResult, SummaryStyle};
use crate::playlist::events::{BatchJob, JobScope, OrchestratorEvent, RunId, RunOutcome};
use crate::render::{self, Action, Fragment, ResultView};
use crate::state::ui_state::{LoadAllStatus, Step, Tab, UiState};
use crate::utils::config::{AppSettings, ERROR_DISPLAY_DELAY};
use crate::utils::error::{GatewayError, SummarizerError, ValidationError};
use crate::utils::export::{playlist_export, video_export, ExportFile};
use crate::utils::validation::validate;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Hand this back to `revert` once `delay` has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRevert {
    pub generation: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
struct ActiveRun {
    run_id: RunId,
    scope: JobScope,
    cancel: CancellationToken,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: UiState,
    view: Option<ResultView>,
    /// Bumped on every submit and reset so late revert tickets are ignored
    generation: u64,
    active_run: Option<ActiveRun>,
}

impl Controller {
    pub fn new(settings: &AppSettings) -> Self {
        let mut controller = Self::default();
        controller.state.form.kind = settings.default_kind;
        controller.state.form.style = settings.default_style;
        controller.state.form.persist = settings.save_to_file;
        controller
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> Option<&ResultView> {
        self.view.as_ref()
    }

    pub fn step(&self) -> Step {
        self.state.active_step
    }

    pub fn banner(&self) -> Option<Fragment> {
        self.state.banner.as_deref().map(render::render_error)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.state.expanded.contains(&index)
    }

    pub fn active_run_id(&self) -> Option<RunId> {
        self.active_run.as_ref().map(|run| run.run_id)
    }

    pub fn select_kind(&mut self, kind: ContentKind) {
        self.state.form.kind = kind;
    }

    pub fn select_style(&mut self, style: SummaryStyle) {
        self.state.form.style = style;
    }

    pub fn set_persist(&mut self, persist: bool) {
        self.state.form.persist = persist;
    }

    pub fn set_link(&mut self, link: impl Into<String>) {
        self.state.form.link = link.into();
        self.state.form.link_error = None;
    }

    /// Validate the form and move to Loading. Nothing changes but the inline
    /// error when the link is refused.
    pub fn submit(&mut self) -> Result<SummaryRequest, ValidationError> {
        let reference = self.state.form.link.trim().to_string();
        if let Err(e) = validate(&reference) {
            debug!("Rejected link ({})", e.reason());
            self.state.form.link_error = Some(e);
            return Err(e);
        }

        let form = &self.state.form;
        let request = SummaryRequest::new(form.kind, reference, form.style).with_persist(form.persist);
        info!("Submitting {:?} request for {}", request.kind, request.reference);

        self.generation += 1;
        self.state.form.link_error = None;
        self.state.banner = None;
        self.state.last_request = Some(request.clone());
        self.state.active_step = Step::Loading;
        Ok(request)
    }

    pub fn loading_message(&self) -> &'static str {
        self.state.loading_message()
    }

    pub fn complete_single(&mut self, result: SummaryResult) -> bool {
        if self.state.active_step != Step::Loading {
            warn!("Dropping single result outside the loading step");
            return false;
        }
        self.view = Some(render::render_single(&result));
        self.state.last_single = Some(result);
        self.state.last_batch = None;
        self.enter_result();
        true
    }

    pub fn complete_playlist(&mut self, batch: PlaylistBatch) -> bool {
        if self.state.active_step != Step::Loading {
            warn!("Dropping playlist result outside the loading step");
            return false;
        }
        self.state.load_all = LoadAllStatus::Idle;
        self.view = Some(render::render_playlist_skeleton(&batch, self.state.load_all));
        self.state.last_batch = Some(batch);
        self.state.last_single = None;
        self.enter_result();
        true
    }

    fn enter_result(&mut self) {
        self.state.expanded.clear();
        self.state.active_tab = Tab::Summary;
        self.state.active_step = Step::Result;
    }

    /// Show the error on the loading panel; the form comes back after the delay
    pub fn fail_request(&mut self, error: &GatewayError) -> PendingRevert {
        warn!("Summary request failed: {}", error);
        self.state.banner = Some(error.message.clone());
        PendingRevert {
            generation: self.generation,
            delay: ERROR_DISPLAY_DELAY,
        }
    }

    pub fn revert(&mut self, ticket: PendingRevert) -> bool {
        if ticket.generation != self.generation || self.state.active_step != Step::Loading {
            debug!("Ignoring stale revert ticket {}", ticket.generation);
            return false;
        }
        self.state.banner = None;
        self.state.active_step = Step::Form;
        true
    }

    /// Back to an empty form. Any running orchestrator is told to stop.
    pub fn reset(&mut self) {
        if let Some(run) = self.active_run.take() {
            info!("Cancelling run {} on reset", run.run_id);
            run.cancel.cancel();
        }
        self.generation += 1;

        let form = &mut self.state.form;
        form.link.clear();
        form.link_error = None;

        self.state.active_step = Step::Form;
        self.state.active_tab = Tab::Summary;
        self.state.last_request = None;
        self.state.last_single = None;
        self.state.last_batch = None;
        self.state.load_all = LoadAllStatus::Idle;
        self.state.expanded.clear();
        self.state.banner = None;
        self.view = None;
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.state.active_step != Step::Result {
            return false;
        }
        if tab == Tab::AllVideos && !self.state.is_playlist() {
            return false;
        }
        self.state.active_tab = tab;
        true
    }

    /// Flip a resolved item between preview and full text
    pub fn toggle_item(&mut self, index: usize) -> bool {
        let collapsible = self
            .playlist_fragment(index)
            .map(Fragment::is_collapsible)
            .unwrap_or(false);
        if !collapsible {
            return false;
        }
        if !self.state.expanded.remove(&index) {
            self.state.expanded.insert(index);
        }
        true
    }

    fn playlist_fragment(&self, index: usize) -> Option<&Fragment> {
        self.view.as_ref()?.playlist.as_ref()?.items.get(index)
    }

    pub fn begin_load_all(&mut self) -> Option<BatchJob> {
        if !matches!(self.state.load_all, LoadAllStatus::Idle | LoadAllStatus::Failed) {
            return None;
        }
        let job = self.start_run(JobScope::All)?;
        self.state.load_all = LoadAllStatus::Running;
        self.rerender_load_all();
        Some(job)
    }

    pub fn begin_item_load(&mut self, index: usize) -> Option<BatchJob> {
        let batch = self.state.last_batch.as_ref()?;
        if !batch.items.get(index)?.needs_fetch() {
            return None;
        }
        self.start_run(JobScope::Item(index))
    }

    fn start_run(&mut self, scope: JobScope) -> Option<BatchJob> {
        if self.state.active_step != Step::Result {
            return None;
        }
        if let Some(run) = &self.active_run {
            debug!("Run {} still active, refusing {:?}", run.run_id, scope);
            return None;
        }
        let batch = self.state.last_batch.clone()?;
        let job = BatchJob::new(batch, scope);
        self.active_run = Some(ActiveRun {
            run_id: job.run_id,
            scope,
            cancel: job.cancel.clone(),
        });
        self.rerender_controls();
        Some(job)
    }

    /// Apply one orchestrator event to the mirror and re-render that item
    pub fn apply(&mut self, event: OrchestratorEvent) -> bool {
        if self.active_run_id() != Some(event.run_id()) {
            debug!("Dropping event from stale run {}", event.run_id());
            return false;
        }
        let Some(batch) = self.state.last_batch.as_mut() else {
            return false;
        };

        let index = event.index();
        let applied = match event {
            OrchestratorEvent::ItemLoading { index, .. } => batch.mark_loading(index),
            OrchestratorEvent::ItemUpdated { index, item, .. } => batch.replace(index, item),
        };
        if applied {
            self.rerender_item(index);
        }
        applied
    }

    /// Settle the run; only the active run may do so
    pub fn finish_run(&mut self, run_id: RunId, outcome: RunOutcome) -> bool {
        match &self.active_run {
            Some(run) if run.run_id == run_id => {}
            _ => {
                debug!("Ignoring finish of stale run {}", run_id);
                return false;
            }
        }
        let Some(run) = self.active_run.take() else {
            return false;
        };

        // A cut-short run may leave its last item marked as loading
        if let Some(batch) = self.state.last_batch.as_mut() {
            batch.in_flight = None;
        }

        if run.scope == JobScope::All {
            self.state.load_all = match &outcome {
                RunOutcome::Completed => LoadAllStatus::Complete,
                RunOutcome::Cancelled => LoadAllStatus::Idle,
                RunOutcome::Failed(reason) => {
                    warn!("Load all failed: {}", reason);
                    LoadAllStatus::Failed
                }
            };
        }
        self.rerender_controls();
        true
    }

    /// Route a fragment binding; load actions hand back a job to run
    pub fn handle_action(&mut self, action: Action) -> Option<BatchJob> {
        match action {
            Action::LoadAll => self.begin_load_all(),
            Action::LoadItem(index) => self.begin_item_load(index),
            Action::Expand(index) => {
                if !self.is_expanded(index) {
                    self.toggle_item(index);
                }
                None
            }
            Action::Collapse(index) => {
                if self.is_expanded(index) {
                    self.toggle_item(index);
                }
                None
            }
        }
    }

    /// What the Summary tab shows, as plain text
    pub fn copy_text(&self) -> Option<String> {
        self.view.as_ref().map(|view| view.summary.visible_text(false))
    }

    pub fn export(&self) -> Result<ExportFile, SummarizerError> {
        let request = self
            .state
            .last_request
            .as_ref()
            .ok_or(SummarizerError::NothingToExport)?;

        if let Some(batch) = &self.state.last_batch {
            return Ok(playlist_export(&request.reference, batch));
        }
        if let Some(result) = &self.state.last_single {
            return Ok(video_export(&request.reference, request.style, result));
        }
        Err(SummarizerError::NothingToExport)
    }

    fn rerender_item(&mut self, index: usize) {
        let Some(batch) = self.state.last_batch.as_ref() else {
            return;
        };
        let Some(item) = batch.items.get(index) else {
            return;
        };
        let locked = self.active_run.is_some();
        let fragment = render::render_item(index, item, batch.is_loading(index), locked);
        if !fragment.is_collapsible() {
            self.state.expanded.remove(&index);
        }
        if let Some(slot) = self
            .view
            .as_mut()
            .and_then(|view| view.playlist.as_mut())
            .and_then(|playlist| playlist.items.get_mut(index))
        {
            *slot = fragment;
        }
    }

    fn rerender_load_all(&mut self) {
        let status = self.state.load_all;
        let locked = self.active_run.is_some();
        if let Some(playlist) = self.view.as_mut().and_then(|view| view.playlist.as_mut()) {
            playlist.load_all = render::render_load_all(status, locked);
        }
    }

    /// Load buttons depend on whether a run holds the gateway
    fn rerender_controls(&mut self) {
        let count = self.state.last_batch.as_ref().map_or(0, |batch| batch.items.len());
        for index in 0..count {
            self.rerender_item(index);
        }
        self.rerender_load_all();
    }
}
