use std::collections::HashSet;
use std::fmt;

// ---------------------------------------------------------------------------
// RawRow – one source row before the missing-value rule is applied
// ---------------------------------------------------------------------------

/// The three selected cells of a source row. `None` means the cell was
/// missing (empty, an NA token, or a numeric NaN).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub player: Option<String>,
    pub salary: Option<f64>,
    pub three_point_percentage: Option<f64>,
}

impl RawRow {
    /// Convert into a record, or `None` when any cell is missing.
    fn into_record(self) -> Option<PlayerRecord> {
        let salary = self.salary.filter(|v| !v.is_nan())?;
        let pct = self.three_point_percentage.filter(|v| !v.is_nan())?;
        Some(PlayerRecord {
            name: self.player?,
            salary,
            three_point_percentage: pct,
        })
    }
}

// ---------------------------------------------------------------------------
// PlayerRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single player: name, salary in dollars, three-point fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub salary: f64,
    pub three_point_percentage: f64,
}

impl PlayerRecord {
    /// Three-point accuracy as a percentage (fraction × 100).
    pub fn accuracy_pct(&self) -> f64 {
        self.three_point_percentage * 100.0
    }
}

impl fmt::Display for PlayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (${:.0}, {:.1}% 3PT)",
            self.name,
            self.salary,
            self.accuracy_pct()
        )
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All complete player rows, in source order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PlayerRecord>,
    dropped: usize,
}

impl Dataset {
    /// Build a dataset from raw rows, dropping every row with a missing cell.
    pub fn from_rows(rows: impl IntoIterator<Item = RawRow>) -> Self {
        let mut records = Vec::new();
        let mut dropped = 0;
        for row in rows {
            match row.into_record() {
                Some(record) => records.push(record),
                None => dropped += 1,
            }
        }
        Dataset { records, dropped }
    }

    pub fn records(&self) -> &[PlayerRecord] {
        &self.records
    }

    /// Number of source rows dropped for missing values.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Player names in load order, for the selection controls.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// First record whose name matches exactly.
    pub fn find(&self, name: &str) -> Option<&PlayerRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// `(min, max)` salary, or `None` for an empty dataset.
    pub fn salary_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.salary);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }

    /// Names that appear on more than one row, in order of first repeat.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut dups = Vec::new();
        for name in self.player_names() {
            if !seen.insert(name) && reported.insert(name) {
                dups.push(name);
            }
        }
        dups
    }

    pub fn salaries(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.salary).collect()
    }

    pub fn three_point_fractions(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.three_point_percentage).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: Option<&str>, salary: Option<f64>, pct: Option<f64>) -> RawRow {
        RawRow {
            player: name.map(str::to_string),
            salary,
            three_point_percentage: pct,
        }
    }

    #[test]
    fn incomplete_rows_are_dropped_in_order() {
        let ds = Dataset::from_rows(vec![
            row(Some("A"), Some(1.0e6), Some(0.30)),
            row(None, Some(2.0e6), Some(0.31)),
            row(Some("B"), None, Some(0.32)),
            row(Some("C"), Some(3.0e6), None),
            row(Some("D"), Some(4.0e6), Some(f64::NAN)),
            row(Some("E"), Some(5.0e6), Some(0.35)),
        ]);
        let names: Vec<&str> = ds.player_names().collect();
        assert_eq!(names, vec!["A", "E"]);
        assert_eq!(ds.dropped(), 4);
    }

    #[test]
    fn find_returns_first_match() {
        let ds = Dataset::from_rows(vec![
            row(Some("A"), Some(1.0e6), Some(0.30)),
            row(Some("A"), Some(9.0e6), Some(0.50)),
        ]);
        assert_eq!(ds.find("A").unwrap().salary, 1.0e6);
        assert!(ds.find("a").is_none());
        assert_eq!(ds.duplicate_names(), vec!["A"]);
    }

    #[test]
    fn salary_range_spans_records() {
        let ds = Dataset::from_rows(vec![
            row(Some("A"), Some(5.0e6), Some(0.30)),
            row(Some("B"), Some(1.0e6), Some(0.30)),
            row(Some("C"), Some(9.0e6), Some(0.30)),
        ]);
        assert_eq!(ds.salary_range(), Some((1.0e6, 9.0e6)));
        assert_eq!(Dataset::default().salary_range(), None);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let ds = Dataset::from_rows(vec![row(Some("A"), Some(-1.0), Some(1.7))]);
        assert_eq!(ds.len(), 1);
        assert!((ds.records()[0].accuracy_pct() - 170.0).abs() < 1e-9);
    }
}
