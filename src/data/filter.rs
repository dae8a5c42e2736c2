use super::model::Dataset;

// ---------------------------------------------------------------------------
// Player search used by the selection controls
// ---------------------------------------------------------------------------

/// Return indices of players whose name contains `query`, case-insensitively.
///
/// * An empty (or all-whitespace) query matches every player.
/// * Indices are in load order, so the dropdown order is stable.
pub fn matching_players(dataset: &Dataset, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| needle.is_empty() || r.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RawRow;

    fn dataset(names: &[&str]) -> Dataset {
        Dataset::from_rows(names.iter().map(|n| RawRow {
            player: Some(n.to_string()),
            salary: Some(1.0e6),
            three_point_percentage: Some(0.35),
        }))
    }

    #[test]
    fn empty_query_matches_all() {
        let ds = dataset(&["Stephen Curry", "Klay Thompson", "Draymond Green"]);
        assert_eq!(matching_players(&ds, ""), vec![0, 1, 2]);
        assert_eq!(matching_players(&ds, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn substring_is_case_insensitive() {
        let ds = dataset(&["Stephen Curry", "Seth Curry", "Klay Thompson"]);
        assert_eq!(matching_players(&ds, "curry"), vec![0, 1]);
        assert_eq!(matching_players(&ds, "KLAY"), vec![2]);
        assert!(matching_players(&ds, "zion").is_empty());
    }
}
