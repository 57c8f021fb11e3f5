//! Folio - lightweight PDF viewer shell
//!
//! Window, menu and recent-documents management around an external
//! document renderer.

mod app;
mod core;
mod shell;
mod ui;

use app::FolioApp;
use crate::core::config::AppConfig;
use crate::shell::window::WindowSpec;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(config.level_filter())
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Using default settings: {:#}", e);
    }

    tracing::info!("Starting Folio...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let native_options = eframe::NativeOptions {
        viewport: WindowSpec::primary(&config.window).viewport(),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        native_options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, &config, args)))),
    )
}
