use thiserror::Error;

use crate::data::model::{Dataset, PlayerRecord};

/// Which selection could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Missing {
    Player1(String),
    Player2(String),
    Both(String, String),
}

impl Missing {
    fn names(&self) -> String {
        match self {
            Missing::Player1(n) | Missing::Player2(n) => n.clone(),
            Missing::Both(a, b) => format!("{a}, {b}"),
        }
    }
}

/// Rejected comparison. The message is shown to the user verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Please select two players to compare.")]
    Selection,

    #[error("Player not found: {}", .0.names())]
    NotFound(Missing),
}

/// Salary and accuracy of one compared player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub name: String,
    /// Dollars.
    pub salary: f64,
    /// Percent (fraction × 100).
    pub accuracy_pct: f64,
}

impl From<&PlayerRecord> for PlayerStats {
    fn from(r: &PlayerRecord) -> Self {
        PlayerStats {
            name: r.name.clone(),
            salary: r.salary,
            accuracy_pct: r.accuracy_pct(),
        }
    }
}

/// Two players paired for side-by-side rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub player1: PlayerStats,
    pub player2: PlayerStats,
}

impl Comparison {
    pub fn title(&self) -> String {
        format!("{} vs {}", self.player1.name, self.player2.name)
    }

    /// `(label, salary)` pairs in selection order.
    pub fn salary_series(&self) -> [(&str, f64); 2] {
        [
            (self.player1.name.as_str(), self.player1.salary),
            (self.player2.name.as_str(), self.player2.salary),
        ]
    }

    /// `(label, accuracy %)` pairs in selection order.
    pub fn accuracy_series(&self) -> [(&str, f64); 2] {
        [
            (self.player1.name.as_str(), self.player1.accuracy_pct),
            (self.player2.name.as_str(), self.player2.accuracy_pct),
        ]
    }
}

/// Look up two players by exact name. The first matching row wins.
pub fn compare(dataset: &Dataset, name1: &str, name2: &str) -> Result<Comparison, ComparisonError> {
    if name1.is_empty() || name2.is_empty() {
        return Err(ComparisonError::Selection);
    }

    let missing = match (dataset.find(name1), dataset.find(name2)) {
        (Some(p1), Some(p2)) => {
            log::debug!("Comparing {p1} with {p2}");
            return Ok(Comparison {
                player1: p1.into(),
                player2: p2.into(),
            });
        }
        (None, Some(_)) => Missing::Player1(name1.to_string()),
        (Some(_), None) => Missing::Player2(name2.to_string()),
        (None, None) => Missing::Both(name1.to_string(), name2.to_string()),
    };
    Err(ComparisonError::NotFound(missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RawRow;

    fn dataset() -> Dataset {
        Dataset::from_rows(
            [
                ("A", 1_000_000.0, 0.30),
                ("B", 5_000_000.0, 0.35),
                ("C", 10_000_000.0, 0.40),
                ("A", 9_000_000.0, 0.10),
            ]
            .into_iter()
            .map(|(n, s, p)| RawRow {
                player: Some(n.to_string()),
                salary: Some(s),
                three_point_percentage: Some(p),
            }),
        )
    }

    #[test]
    fn empty_selection_checked_first() {
        let ds = dataset();
        assert_eq!(compare(&ds, "", "X"), Err(ComparisonError::Selection));
        assert_eq!(compare(&ds, "A", ""), Err(ComparisonError::Selection));
        assert_eq!(
            ComparisonError::Selection.to_string(),
            "Please select two players to compare."
        );
    }

    #[test]
    fn unknown_names_reported() {
        let ds = dataset();
        let err = compare(&ds, "NotAPlayer", "X").unwrap_err();
        assert_eq!(
            err,
            ComparisonError::NotFound(Missing::Both("NotAPlayer".into(), "X".into()))
        );
        assert_eq!(err.to_string(), "Player not found: NotAPlayer, X");

        let err = compare(&ds, "A", "Z").unwrap_err();
        assert_eq!(err, ComparisonError::NotFound(Missing::Player2("Z".into())));
        assert_eq!(err.to_string(), "Player not found: Z");
    }

    #[test]
    fn pairs_salary_and_percent() {
        let cmp = compare(&dataset(), "A", "B").unwrap();
        assert_eq!(cmp.player1.salary, 1_000_000.0);
        assert!((cmp.player1.accuracy_pct - 30.0).abs() < 1e-9);
        assert_eq!(cmp.player2.salary, 5_000_000.0);
        assert!((cmp.player2.accuracy_pct - 35.0).abs() < 1e-9);
        assert_eq!(cmp.title(), "A vs B");
        assert_eq!(cmp.salary_series()[1], ("B", 5_000_000.0));
    }

    #[test]
    fn duplicate_name_uses_first_row() {
        let cmp = compare(&dataset(), "A", "A").unwrap();
        assert_eq!(cmp.player1.salary, 1_000_000.0);
        assert_eq!(cmp.player2.salary, 1_000_000.0);
    }
}
