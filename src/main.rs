// src/main.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use co2_portal::config::{default_settings_path, Settings};
use co2_portal::data::load_sample_records;
use co2_portal::env::{Environment, FixedEnvironment, SystemEnvironment};
use co2_portal::state::AppState;
use co2_portal::PortalApp;

/// Browse and extend a list of fictitious CO₂ emission records.
#[derive(Debug, Parser)]
struct Cli {
    /// Language tag used to pick the reading direction (e.g. `de`, `ar-EG`).
    /// Overrides the settings file and the system locale.
    #[arg(long)]
    lang: Option<String>,

    /// Settings file. Defaults to `<config dir>/co2-portal/settings.ron`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long)]
    log_level: Option<String>,
}

/// RUST_LOG wins, then the given level, then `info`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().or_else(default_settings_path);
    let mut settings = Settings::load(settings_path.as_deref())?;
    if let Some(lang) = cli.lang {
        settings.language = Some(lang);
    }
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }

    init_tracing(&settings.log_level);
    debug!(?settings_path, ?settings, "settings loaded");

    let env: Box<dyn Environment> = match settings.language.clone() {
        Some(language) => Box::new(FixedEnvironment(Some(language))),
        None => Box::new(SystemEnvironment),
    };

    let records = load_sample_records().context("Failed to load sample data")?;
    let state = AppState::new(records, env.as_ref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("CO₂ Transparency Portal"),
        ..Default::default()
    };

    info!("starting portal window");
    eframe::run_native(
        "CO₂ Transparency Portal",
        options,
        Box::new(move |_cc| Box::new(PortalApp::new(state))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
