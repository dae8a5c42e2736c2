use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points};
use nba_salary_dashboard::data::model::{Dataset, PlayerRecord};
use nba_salary_dashboard::engine::Engine;
use nba_salary_dashboard::engine::compare::Comparison;
use nba_salary_dashboard::engine::predict::Prediction;

use crate::color::{ColorScale, blues};

const PLAYERS_SERIES: &str = "Players";
/// Number of colour bands the scatter points are split into.
const COLOR_BANDS: usize = 10;

const ROYAL_BLUE: Color32 = Color32::from_rgb(65, 105, 225);
const ORANGE: Color32 = Color32::from_rgb(255, 165, 0);

// ---------------------------------------------------------------------------
// Salary vs accuracy scatter (home page)
// ---------------------------------------------------------------------------

/// Scatter of every player, the cached regression line and, after a
/// successful prediction, the predicted point.
pub fn scatter_plot(
    ui: &mut Ui,
    engine: &Engine,
    scale: &ColorScale,
    prediction: Option<&Prediction>,
) {
    let dataset = engine.dataset();
    if dataset.is_empty() {
        ui.label("No players loaded.");
        return;
    }

    // One series per colour band; sharing a name keeps a single legend entry.
    let mut bands: Vec<Vec<[f64; 2]>> = vec![Vec::new(); COLOR_BANDS];
    for r in dataset.records() {
        let pct = r.accuracy_pct();
        let band = ((scale.position(pct) * COLOR_BANDS as f32) as usize).min(COLOR_BANDS - 1);
        bands[band].push([r.salary, pct]);
    }

    let hover_engine = engine.clone();

    Plot::new("salary_vs_accuracy")
        .legend(Legend::default())
        .height(420.0)
        .x_axis_label("Salary ($)")
        .y_axis_label("3PT Accuracy (%)")
        .label_formatter(move |name, value| hover_label(hover_engine.dataset(), name, value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (band, points) in bands.into_iter().enumerate() {
                if points.is_empty() {
                    continue;
                }
                let t = (band as f32 + 0.5) / COLOR_BANDS as f32;
                let points = Points::new(points)
                    .name(PLAYERS_SERIES)
                    .color(blues(t))
                    .radius(3.0);
                plot_ui.points(points);
            }

            let line: PlotPoints = engine.curve().points().collect();
            plot_ui.line(
                Line::new(line)
                    .name("Regression Line")
                    .color(Color32::RED)
                    .width(2.0),
            );

            if let Some(p) = prediction {
                plot_ui.points(
                    Points::new(vec![[p.salary, p.predicted_percentage]])
                        .name("Predicted Point")
                        .shape(MarkerShape::Asterisk)
                        .color(Color32::RED)
                        .radius(8.0),
                );
            }
        });

    if let Some(p) = prediction {
        ui.small(p.hover_text());
    }
}

/// Hover text: the nearest player for the scatter series, coordinates otherwise.
fn hover_label(dataset: &Dataset, name: &str, value: &PlotPoint) -> String {
    if name == PLAYERS_SERIES {
        if let Some(r) = nearest_player(dataset, value.x, value.y) {
            return format!(
                "{}\nSalary: ${:.0}\n3PT: {:.1}%",
                r.name,
                r.salary,
                r.accuracy_pct()
            );
        }
    }
    if name.is_empty() {
        format!("Salary: ${:.0}\n3PT: {:.2}%", value.x, value.y)
    } else {
        format!("{name}\nSalary: ${:.0}\n3PT: {:.2}%", value.x, value.y)
    }
}

/// Player closest to `(salary, pct)` after normalising both axes by their range.
fn nearest_player(dataset: &Dataset, salary: f64, pct: f64) -> Option<&PlayerRecord> {
    let (lo, hi) = dataset.salary_range()?;
    let salary_span = (hi - lo).max(1.0);
    let distance = |r: &PlayerRecord| {
        let dx = (r.salary - salary) / salary_span;
        let dy = (r.accuracy_pct() - pct) / 100.0;
        dx * dx + dy * dy
    };
    dataset
        .records()
        .iter()
        .min_by(|a, b| distance(a).total_cmp(&distance(b)))
}

// ---------------------------------------------------------------------------
// Side-by-side comparison bars
// ---------------------------------------------------------------------------

/// Salary and accuracy bars for both players, one plot per metric.
pub fn comparison_chart(ui: &mut Ui, cmp: &Comparison) {
    ui.columns(2, |cols| {
        metric_plot(&mut cols[0], "compare_salary", "Salary ($)", cmp.salary_series());
        metric_plot(
            &mut cols[1],
            "compare_accuracy",
            "3PT Accuracy (%)",
            cmp.accuracy_series(),
        );
    });
}

fn metric_plot(ui: &mut Ui, id: &str, metric: &str, series: [(&str, f64); 2]) {
    let colors = [ROYAL_BLUE, ORANGE];

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(metric);
    });
    Plot::new(id)
        .legend(Legend::default())
        .height(320.0)
        .y_axis_label(metric)
        .show_x(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (i, ((label, value), color)) in series.into_iter().zip(colors).enumerate() {
                let bar = Bar::new(i as f64, value).width(0.6).name(label);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(label).color(color));
            }
        });
}
