use eframe::egui::{self, Color32, PopupCloseBehavior, RichText, ScrollArea, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use nba_salary_dashboard::data::filter::matching_players;
use nba_salary_dashboard::data::model::Dataset;
use nba_salary_dashboard::engine::Engine;
use nba_salary_dashboard::engine::compare::{Comparison, ComparisonError};

use crate::color::ColorScale;
use crate::state::{AppState, Page, Slot};
use crate::ui::plot;

const PRIMARY: Color32 = Color32::from_rgb(13, 110, 253);

const DESCRIPTION: &str = "This dashboard analyzes the relationship between NBA player salaries \
and their three-point shooting accuracy. Using real NBA data, the model predicts a player's 3PT \
accuracy based on their salary. You can enter a salary to estimate a player's expected 3PT \
percentage or compare two players to see how they match up.";

// ---------------------------------------------------------------------------
// Navigation bar / footer
// ---------------------------------------------------------------------------

pub fn navbar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("NBA Salary & Performance Analysis");
        ui.separator();
        for page in Page::ALL {
            if ui.selectable_label(state.page == page, page.label()).clicked() {
                state.page = page;
            }
        }
    });
}

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.weak("Built with egui & egui_plot | © 2025");
    });
}

// ---------------------------------------------------------------------------
// Home page – scatter plot and salary prediction
// ---------------------------------------------------------------------------

pub fn home_page(ui: &mut Ui, state: &mut AppState, engine: &Engine, scale: &ColorScale) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.heading("NBA Three-Point Accuracy vs. Salary");
                ui.add_space(4.0);
                ui.label(RichText::new(DESCRIPTION).weak());
            });
            ui.add_space(8.0);

            plot::scatter_plot(ui, engine, scale, state.predicted_point());
            color_legend(ui, scale);
            ui.separator();

            ui.horizontal(|ui: &mut Ui| {
                ui.strong("Enter Salary (in Millions $M):");
                let response =
                    ui.add(TextEdit::singleline(&mut state.salary_input).desired_width(120.0));
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Predict").clicked() || submitted {
                    state.run_prediction(engine);
                }
            });

            match &state.prediction {
                Some(Ok(prediction)) => {
                    ui.label(
                        RichText::new(prediction.to_string())
                            .size(20.0)
                            .strong()
                            .color(PRIMARY),
                    );
                }
                Some(Err(e)) => {
                    ui.label(RichText::new(format!("⚠ {e}")).color(Color32::RED));
                }
                None => {}
            }
        });
}

/// Colour-bar legend for the scatter points.
fn color_legend(ui: &mut Ui, scale: &ColorScale) {
    ui.horizontal(|ui: &mut Ui| {
        ui.small("3PT Accuracy (%)");
        for (label, color) in scale.legend_entries(5) {
            ui.label(RichText::new("■").color(color));
            ui.small(label);
        }
    });
}

// ---------------------------------------------------------------------------
// Comparison page
// ---------------------------------------------------------------------------

pub fn compare_page(ui: &mut Ui, state: &mut AppState, engine: &Engine) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Compare NBA Players");
    });
    ui.add_space(8.0);

    let dataset = engine.dataset();
    player_selector(ui, "player_1", "Select Player 1:", state, Slot::First, dataset);
    player_selector(ui, "player_2", "Select Player 2:", state, Slot::Second, dataset);

    if ui.button("Compare").clicked() {
        state.run_comparison(engine);
    }
    ui.separator();

    match &state.comparison {
        None => {
            ui.label(RichText::new(format!("⚠ {}", ComparisonError::Selection)).weak());
        }
        Some(Err(e)) => {
            ui.label(RichText::new(format!("⚠ {e}")).color(Color32::RED));
        }
        Some(Ok(cmp)) => {
            ui.heading(cmp.title());
            plot::comparison_chart(ui, cmp);
            ui.add_space(8.0);
            stats_table(ui, cmp);
        }
    }
}

/// Searchable dropdown over all player names, in load order.
fn player_selector(
    ui: &mut Ui,
    id: &str,
    label: &str,
    state: &mut AppState,
    slot: Slot,
    dataset: &Dataset,
) {
    let (selected, query) = match slot {
        Slot::First => (state.player1.clone(), &mut state.player1_query),
        Slot::Second => (state.player2.clone(), &mut state.player2_query),
    };

    let mut picked: Option<String> = None;
    let mut cleared = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        let shown = if selected.is_empty() {
            "Select…"
        } else {
            selected.as_str()
        };
        egui::ComboBox::from_id_salt(id)
            .selected_text(shown)
            .width(280.0)
            .close_behavior(PopupCloseBehavior::CloseOnClickOutside)
            .show_ui(ui, |ui: &mut Ui| {
                ui.add(TextEdit::singleline(query).hint_text("Search players…"));
                ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui: &mut Ui| {
                        for idx in matching_players(dataset, query) {
                            let name = &dataset.records()[idx].name;
                            if ui.selectable_label(*name == selected, name.as_str()).clicked() {
                                picked = Some(name.clone());
                            }
                        }
                    });
            });
        if ui
            .small_button("✖")
            .on_hover_text("Clear selection")
            .clicked()
        {
            cleared = true;
        }
    });

    if let Some(name) = picked {
        state.select_player(slot, &name);
        ui.memory_mut(|m| m.close_popup());
    }
    if cleared {
        state.clear_selection(slot);
    }
}

fn stats_table(ui: &mut Ui, cmp: &Comparison) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Player");
            });
            header.col(|ui| {
                ui.strong("Salary ($)");
            });
            header.col(|ui| {
                ui.strong("3PT Accuracy (%)");
            });
        })
        .body(|mut body| {
            for p in [&cmp.player1, &cmp.player2] {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(p.name.as_str());
                    });
                    row.col(|ui| {
                        ui.label(format_dollars(p.salary));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.1}%", p.accuracy_pct));
                    });
                });
            }
        });
}

/// `48070014.0` → `"$48,070,014"`.
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_are_grouped() {
        assert_eq!(format_dollars(48_070_014.0), "$48,070,014");
        assert_eq!(format_dollars(999.4), "$999");
        assert_eq!(format_dollars(1_000.0), "$1,000");
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(-2_500_000.0), "-$2,500,000");
    }
}
