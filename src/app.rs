use eframe::egui;
use nba_salary_dashboard::config::UiConfig;
use nba_salary_dashboard::engine::Engine;

use crate::color::ColorScale;
use crate::state::{AppState, Page};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub engine: Engine,
    pub state: AppState,
    pub color_scale: ColorScale,
}

impl DashboardApp {
    pub fn new(engine: Engine, ui: &UiConfig) -> Self {
        let state = AppState::new(engine.dataset(), ui);
        let color_scale = ColorScale::from_values(
            engine.dataset().records().iter().map(|r| r.accuracy_pct()),
        );
        Self {
            engine,
            state,
            color_scale,
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: navigation bar ----
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            panels::navbar(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            panels::footer(ui);
        });

        // ---- Central panel: current page ----
        let page = self.state.page;
        egui::CentralPanel::default().show(ctx, |ui| match page {
            Page::Home => panels::home_page(ui, &mut self.state, &self.engine, &self.color_scale),
            Page::Compare => panels::compare_page(ui, &mut self.state, &self.engine),
        });
    }
}
