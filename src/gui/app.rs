//! Main GUI application

use crate::gateway::{HttpGateway, SummaryGateway};
use crate::gui::clipboard;
use crate::gui::theme;
use crate::gui::views::{form_view, loading_view, result_view};
use crate::models::{ContentKind, PlaylistBatch, SummaryResult, SummaryStyle};
use crate::playlist::{BatchJob, OrchestratorEvent, PlaylistOrchestrator, RunId, RunOutcome};
use crate::render::Action;
use crate::state::{Controller, PendingRevert, Step, Tab};
use crate::utils::config::{AppSettings, ERROR_DISPLAY_DELAY};
use crate::utils::error::GatewayError;
use crate::utils::export::save_export_to;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Application, Command, Element, Length, Subscription, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

/// Everything the window needs at startup
pub struct AppFlags {
    pub settings: AppSettings,
    pub gateway: HttpGateway,
}

/// Main application state
pub struct SummarizerApp {
    settings: AppSettings,
    controller: Controller,
    gateway: HttpGateway,
    orchestrator: PlaylistOrchestrator,

    // Orchestrator events, drained on every tick while a run is active
    events_tx: UnboundedSender<OrchestratorEvent>,
    events_rx: UnboundedReceiver<OrchestratorEvent>,

    toast: Option<(String, Instant)>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    KindSelected(ContentKind),
    StyleSelected(SummaryStyle),
    LinkChanged(String),
    PasteLink,
    ClearLink,
    PersistToggled(bool),
    Submit,

    // Gateway answers
    SingleFetched(Result<SummaryResult, GatewayError>),
    PlaylistFetched(Result<PlaylistBatch, GatewayError>),
    RevertElapsed(PendingRevert),
    Primed(Result<(), GatewayError>),

    // Result step
    TabSelected(Tab),
    Fragment(Action),
    RunFinished(RunId, RunOutcome),
    CopySummary,
    DownloadSummary,
    ExportSaved(Result<PathBuf, String>),
    NewSummary,
    OpenService,

    // System
    Tick,
}

impl Application for SummarizerApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags { settings, gateway } = flags;
        let shared: Arc<dyn SummaryGateway> = Arc::new(gateway.clone());
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let app = Self {
            controller: Controller::new(&settings),
            orchestrator: PlaylistOrchestrator::new(shared),
            settings,
            gateway: gateway.clone(),
            events_tx,
            events_rx,
            toast: None,
        };

        // Pick up the anti-forgery cookie before the first POST
        let prime = Command::perform(async move { gateway.prime().await }, Message::Primed);
        (app, prime)
    }

    fn title(&self) -> String {
        String::from("TubeSum - YouTube Summarizer")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::KindSelected(kind) => {
                self.controller.select_kind(kind);
                Command::none()
            }

            Message::StyleSelected(style) => {
                self.controller.select_style(style);
                Command::none()
            }

            Message::LinkChanged(link) => {
                self.controller.set_link(link);
                Command::none()
            }

            Message::PasteLink => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.controller.set_link(content),
                    Err(e) => self.show_toast(e.to_string()),
                }
                Command::none()
            }

            Message::ClearLink => {
                self.controller.set_link(String::new());
                Command::none()
            }

            Message::PersistToggled(persist) => {
                self.controller.set_persist(persist);
                Command::none()
            }

            Message::Submit => self.submit(),

            Message::SingleFetched(result) => match result {
                Ok(summary) => {
                    self.controller.complete_single(summary);
                    Command::none()
                }
                Err(e) => self.request_failed(&e),
            },

            Message::PlaylistFetched(result) => match result {
                Ok(batch) => {
                    self.controller.complete_playlist(batch);
                    Command::none()
                }
                Err(e) => self.request_failed(&e),
            },

            Message::RevertElapsed(ticket) => {
                self.controller.revert(ticket);
                Command::none()
            }

            Message::Primed(result) => {
                if let Err(e) = result {
                    warn!("Could not reach {}: {}", self.settings.api_base_url, e);
                }
                Command::none()
            }

            Message::TabSelected(tab) => {
                self.controller.select_tab(tab);
                Command::none()
            }

            Message::Fragment(action) => match self.controller.handle_action(action) {
                Some(job) => self.spawn_run(job),
                None => Command::none(),
            },

            Message::RunFinished(run_id, outcome) => {
                // Everything the run sent is already queued
                self.drain_events();
                self.controller.finish_run(run_id, outcome);
                Command::none()
            }

            Message::CopySummary => {
                match self.controller.copy_text() {
                    Some(content) => match clipboard::set_clipboard_content(&content) {
                        Ok(()) => self.show_toast("Summary copied to clipboard!"),
                        Err(e) => {
                            error!("{}", e);
                            self.show_toast(e.to_string());
                        }
                    },
                    None => debug!("Copy pressed with nothing to copy"),
                }
                Command::none()
            }

            Message::DownloadSummary => self.download(),

            Message::ExportSaved(result) => {
                match result {
                    Ok(path) => self.show_toast(format!("Summary saved to {}", path.display())),
                    Err(e) => {
                        error!("Export failed: {}", e);
                        self.show_toast(format!("Failed to save summary: {}", e));
                    }
                }
                Command::none()
            }

            Message::NewSummary => {
                self.controller.reset();
                self.drain_events();
                Command::none()
            }

            Message::OpenService => {
                if let Err(e) = open::that(&self.settings.api_base_url) {
                    error!("Failed to open {}: {}", self.settings.api_base_url, e);
                    self.show_toast(format!("Failed to open browser: {}", e));
                }
                Command::none()
            }

            Message::Tick => {
                if self.controller.active_run_id().is_some() {
                    self.drain_events();
                }
                if let Some((_, shown_at)) = &self.toast {
                    if shown_at.elapsed() >= ERROR_DISPLAY_DELAY {
                        self.toast = None;
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let content = match self.controller.step() {
            Step::Form => form_view(&self.controller.state().form),
            Step::Loading => {
                let banner = self.controller.banner();
                loading_view(self.controller.loading_message(), banner.as_ref())
            }
            Step::Result => result_view(&self.controller),
        };

        let header = row![
            text("TubeSum").size(24).style(iced::theme::Text::Color(theme::TEXT_PRIMARY)),
            Space::with_width(Length::Fill),
            button(text(self.settings.api_base_url.as_str()).size(12))
                .on_press(Message::OpenService)
                .padding([4, 8])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
        ];

        let mut layout = column![header, content].spacing(20);
        if let Some((message, _)) = &self.toast {
            layout = layout.push(
                container(text(message.as_str()).size(14))
                    .padding([8, 16])
                    .style(iced::theme::Container::Custom(Box::new(theme::ToastContainer))),
            );
        }

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.controller.active_run_id().is_some() || self.toast.is_some() {
            iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

impl SummarizerApp {
    fn submit(&mut self) -> Command<Message> {
        let request = match self.controller.submit() {
            Ok(request) => request,
            Err(e) => {
                debug!("Submit refused: {}", e);
                return Command::none();
            }
        };

        let gateway = self.gateway.clone();
        match request.kind {
            ContentKind::Video => Command::perform(
                async move { gateway.fetch_single(&request).await },
                Message::SingleFetched,
            ),
            ContentKind::Playlist => Command::perform(
                async move { gateway.fetch_playlist(&request).await },
                Message::PlaylistFetched,
            ),
        }
    }

    fn request_failed(&mut self, error: &GatewayError) -> Command<Message> {
        let ticket = self.controller.fail_request(error);
        Command::perform(tokio::time::sleep(ticket.delay), move |_| {
            Message::RevertElapsed(ticket)
        })
    }

    fn spawn_run(&mut self, job: BatchJob) -> Command<Message> {
        let run_id = job.run_id;
        let orchestrator = self.orchestrator.clone();
        let events = self.events_tx.clone();
        info!("Starting run {} ({:?})", run_id, job.scope);

        Command::perform(async move { orchestrator.run(job, events).await }, move |outcome| {
            Message::RunFinished(run_id, outcome)
        })
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.controller.apply(event);
        }
    }

    fn download(&mut self) -> Command<Message> {
        let file = match self.controller.export() {
            Ok(file) => file,
            Err(e) => {
                self.show_toast(e.to_string());
                return Command::none();
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.settings.export_dir)
            .set_file_name(file.filename.as_str())
            .save_file()
        else {
            return Command::none();
        };

        Command::perform(
            async move {
                save_export_to(&path, &file).await.map_err(|e| e.to_string())?;
                Ok::<PathBuf, String>(path)
            },
            Message::ExportSaved,
        )
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), Instant::now()));
    }
}
