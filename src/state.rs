use nba_salary_dashboard::config::UiConfig;
use nba_salary_dashboard::data::model::Dataset;
use nba_salary_dashboard::engine::Engine;
use nba_salary_dashboard::engine::compare::{Comparison, ComparisonError};
use nba_salary_dashboard::engine::predict::{Prediction, ValidationError};

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Compare,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Compare];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Compare => "Player Comparison",
        }
    }
}

/// Which of the two comparison selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub page: Page,

    /// Salary text box contents, in millions.
    pub salary_input: String,

    /// Last prediction outcome (None until Predict is pressed).
    pub prediction: Option<Result<Prediction, ValidationError>>,

    /// Selected player names (empty = nothing selected).
    pub player1: String,
    pub player2: String,

    /// Search text typed into each selector.
    pub player1_query: String,
    pub player2_query: String,

    /// Last comparison outcome (None until Compare is pressed).
    pub comparison: Option<Result<Comparison, ComparisonError>>,
}

impl AppState {
    /// Initial state: default salary, first two players pre-selected.
    pub fn new(dataset: &Dataset, ui: &UiConfig) -> Self {
        let mut names = dataset.player_names();
        let player1 = names.next().unwrap_or_default().to_string();
        let player2 = names.next().unwrap_or_default().to_string();
        Self {
            page: Page::default(),
            salary_input: ui.default_salary_millions.to_string(),
            prediction: None,
            player1,
            player2,
            player1_query: String::new(),
            player2_query: String::new(),
            comparison: None,
        }
    }

    /// Salary box parsed as a number; blank or garbage is `None`.
    pub fn parsed_salary(&self) -> Option<f64> {
        self.salary_input.trim().parse::<f64>().ok()
    }

    pub fn run_prediction(&mut self, engine: &Engine) {
        let outcome = engine.predict(self.parsed_salary());
        match &outcome {
            Ok(p) => log::info!("{p}"),
            Err(e) => log::debug!("Prediction rejected: {e:?}"),
        }
        self.prediction = Some(outcome);
    }

    /// The successful prediction, if any, for plotting the predicted point.
    pub fn predicted_point(&self) -> Option<&Prediction> {
        self.prediction.as_ref().and_then(|r| r.as_ref().ok())
    }

    pub fn run_comparison(&mut self, engine: &Engine) {
        let outcome = engine.compare(&self.player1, &self.player2);
        if let Err(e) = &outcome {
            log::debug!("Comparison rejected: {e}");
        }
        self.comparison = Some(outcome);
    }

    pub fn select_player(&mut self, slot: Slot, name: &str) {
        let (selected, query) = match slot {
            Slot::First => (&mut self.player1, &mut self.player1_query),
            Slot::Second => (&mut self.player2, &mut self.player2_query),
        };
        *selected = name.to_string();
        query.clear();
    }

    pub fn clear_selection(&mut self, slot: Slot) {
        match slot {
            Slot::First => self.player1.clear(),
            Slot::Second => self.player2.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nba_salary_dashboard::config::ModelConfig;
    use nba_salary_dashboard::data::model::RawRow;

    fn engine() -> Engine {
        let ds = Dataset::from_rows(
            [
                ("A", 1_000_000.0, 0.30),
                ("B", 5_000_000.0, 0.35),
                ("C", 10_000_000.0, 0.40),
            ]
            .into_iter()
            .map(|(n, s, p)| RawRow {
                player: Some(n.to_string()),
                salary: Some(s),
                three_point_percentage: Some(p),
            }),
        );
        Engine::build(ds, &ModelConfig::default()).unwrap()
    }

    #[test]
    fn defaults_preselect_first_two_players() {
        let engine = engine();
        let state = AppState::new(engine.dataset(), &UiConfig::default());
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.player1, "A");
        assert_eq!(state.player2, "B");
        assert_eq!(state.parsed_salary(), Some(15.0));
        assert!(state.prediction.is_none());
        assert!(state.comparison.is_none());
    }

    #[test]
    fn blank_salary_is_validation_error() {
        let engine = engine();
        let mut state = AppState::new(engine.dataset(), &UiConfig::default());
        state.salary_input = "  ".to_string();
        state.run_prediction(&engine);
        assert_eq!(state.prediction, Some(Err(ValidationError::Missing)));
        assert!(state.predicted_point().is_none());
    }

    #[test]
    fn valid_salary_sets_predicted_point() {
        let engine = engine();
        let mut state = AppState::new(engine.dataset(), &UiConfig::default());
        state.salary_input = "5".to_string();
        state.run_prediction(&engine);
        let p = state.predicted_point().unwrap();
        assert_eq!(p.salary, 5_000_000.0);
        assert!(p.predicted_percentage > 30.0 && p.predicted_percentage < 40.0);
    }

    #[test]
    fn comparison_follows_selection() {
        let engine = engine();
        let mut state = AppState::new(engine.dataset(), &UiConfig::default());
        state.player2_query = "c".to_string();
        state.select_player(Slot::Second, "C");
        assert!(state.player2_query.is_empty());
        state.run_comparison(&engine);
        let cmp = state.comparison.clone().unwrap().unwrap();
        assert_eq!(cmp.title(), "A vs C");

        state.clear_selection(Slot::First);
        state.run_comparison(&engine);
        assert_eq!(state.comparison, Some(Err(ComparisonError::Selection)));
    }
}
