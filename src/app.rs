//! Application initialization and main entry point

use crate::gateway::HttpGateway;
use crate::gui::{AppFlags, SummarizerApp};
use crate::utils::config::AppSettings;
use anyhow::{Context, Result};
use iced::{Application, Settings};

/// Run the TubeSum window
pub fn run(settings: AppSettings) -> Result<()> {
    let gateway = HttpGateway::new(&settings).context("Failed to set up the API client")?;

    SummarizerApp::run(Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 700.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(AppFlags { settings, gateway })
    })?;

    Ok(())
}
