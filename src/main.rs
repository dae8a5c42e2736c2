// Dashboard entry point.
//
// Startup sequence:
// 1. Initialize logging (RUST_LOG)
// 2. Load config (optional first argument overrides the data path)
// 3. Load the dataset
// 4. Fit the regression model and cache the plotted curve
// 5. Open the window
//
// Any failure before step 5 aborts startup.

mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::DashboardApp;
use eframe::egui;
use nba_salary_dashboard::config;
use nba_salary_dashboard::data::loader;
use nba_salary_dashboard::engine::Engine;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut config = config::load_config().context("failed to load configuration")?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.data.path = PathBuf::from(path);
    }

    let dataset = loader::load_file(&config.data.path, &config.data.columns)
        .with_context(|| format!("failed to load dataset from {}", config.data.path.display()))?;

    let engine = Engine::build(dataset, &config.model).context("failed to fit regression model")?;
    log::info!(
        "Engine ready: {} players, {} curve samples",
        engine.dataset().len(),
        engine.curve().len()
    );

    let ui_config = config.ui.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([ui_config.window_width, ui_config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NBA Salary & Performance Analysis",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(engine, &ui_config)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
