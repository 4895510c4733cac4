//! TubeSum - YouTube video and playlist summaries
//!
//! A desktop client for a summarization service. Without arguments it opens
//! the window; `--summarize` runs the same flow in the terminal.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tubesum::models::{ContentKind, SummaryStyle};
use tubesum::state::Session;
use tubesum::utils::AppSettings;
use tubesum::HttpGateway;

#[derive(Parser)]
#[command(name = "tubesum", version, about = "Summarize YouTube videos and playlists")]
struct Args {
    /// Base URL of the summarization service
    #[arg(long)]
    api_url: Option<String>,

    /// Summarize this link or video id without opening the window
    #[arg(long, value_name = "REF")]
    summarize: Option<String>,

    /// Treat the reference as a playlist
    #[arg(long, requires = "summarize")]
    playlist: bool,

    /// brief, detailed or bullet
    #[arg(long, requires = "summarize")]
    style: Option<SummaryStyle>,

    /// Do not ask the server to keep a copy
    #[arg(long, requires = "summarize")]
    no_save: bool,

    /// Fetch every pending playlist item after the playlist arrives
    #[arg(long, requires = "playlist")]
    load_all: bool,

    /// Ask the service whether its upstream API is reachable
    #[arg(long)]
    check_connection: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::load()?;
    if let Some(url) = args.api_url.clone() {
        settings.api_base_url = url;
        settings = settings.normalized()?;
    }

    if args.check_connection || args.summarize.is_some() {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(run_headless(args, settings));
    }

    tubesum::app::run(settings)
}

async fn run_headless(args: Args, settings: AppSettings) -> Result<()> {
    let gateway = HttpGateway::new(&settings)?;
    if let Err(e) = gateway.prime().await {
        warn!("Could not load {}: {}", settings.api_base_url, e);
    }

    if args.check_connection {
        let report = gateway.check_connection().await?;
        println!("{}: {}", report.status, report.message);
    }

    let Some(reference) = args.summarize else {
        return Ok(());
    };

    let mut session = Session::new(&settings, Arc::new(gateway));
    let controller = session.controller_mut();
    controller.select_kind(if args.playlist {
        ContentKind::Playlist
    } else {
        ContentKind::Video
    });
    if let Some(style) = args.style {
        controller.select_style(style);
    }
    if args.no_save {
        controller.set_persist(false);
    }
    controller.set_link(reference);

    session.submit().await?;

    if args.load_all {
        match session.load_all().await {
            Some(outcome) => info!("Load all finished: {:?}", outcome),
            None => warn!("Nothing to load"),
        }
    }

    if let Some(text) = session.render_text(true) {
        println!("{}", text);
    }
    Ok(())
}
