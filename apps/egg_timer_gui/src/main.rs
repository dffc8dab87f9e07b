use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::orchestration::launch_ticker;
use crate::ui::{theme::configure_theme, EggTimerApp};

const APP_NAME: &str = "Egg Timer";

#[derive(Parser, Debug)]
#[command(name = "egg-timer", about = "Desktop egg timer")]
struct Args {
    /// Settings file (defaults to ./egg_timer.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// tracing filter directive, e.g. "info" or "egg_core=debug".
    #[arg(long)]
    log_filter: Option<String>,
    /// Window title; a random one is picked when omitted.
    #[arg(long)]
    title: Option<String>,
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter '{filter}': {err}; falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let loaded = config::load_settings(args.config.as_deref());
    let mut settings = loaded.settings;
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }

    init_tracing(&settings.log_filter);
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }

    let title = args
        .title
        .or_else(|| settings.title.clone())
        .unwrap_or_else(egg_core::title::random_title);
    let ticker_config = settings.ticker_config();
    tracing::info!(
        %title,
        tick_hz = ticker_config.hz,
        tick_increment = ticker_config.increment,
        sweep_secs = ticker_config.sweep_duration().as_secs_f32(),
        "starting egg timer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([settings.min_window_width, settings.min_window_height]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            configure_theme(&cc.egui_ctx);
            let (ticker, tick_rx) = launch_ticker(ticker_config, cc.egui_ctx.clone())
                .context("failed to start progress ticker")?;
            Ok(Box::new(EggTimerApp::new(ticker, tick_rx, ticker_config)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}
