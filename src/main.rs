mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::LaunchDashApp;
use config::Config;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    let mut state = AppState::new(config.slider()?);

    // The startup dataset is loaded once; a broken file is fatal.
    if let Some(path) = &config.data {
        let table = data::loader::load_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?;
        state.set_table(table, Some(path.clone()));
        state.set_site(config.site.clone());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
