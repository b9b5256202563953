//! Leaderboard View
//!
//! Rank is the 1-based position in received order. The API is expected to
//! send entries sorted; ties are not re-ordered.

use crate::leaderboard::LeaderboardEntry;

/// Number of entries shown on the podium
pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

impl RankedEntry {
    pub fn is_podium(&self) -> bool {
        self.rank <= PODIUM_SIZE
    }

    /// Medal for the top three, the plain rank otherwise
    pub fn rank_label(&self) -> String {
        match self.rank {
            1 => "🥇".to_string(),
            2 => "🥈".to_string(),
            3 => "🥉".to_string(),
            n => n.to_string(),
        }
    }

    pub fn rank_badge_class(&self) -> &'static str {
        match self.rank {
            1 => "bg-warning text-dark",
            2 => "bg-secondary",
            3 => "bg-danger",
            _ => "bg-primary",
        }
    }

    /// Border accent for podium cards
    pub fn podium_border_class(&self) -> &'static str {
        match self.rank {
            1 => "border-warning",
            2 => "border-secondary",
            _ => "border-danger",
        }
    }

    pub fn average_calories(&self) -> i64 {
        average_calories(self.entry.total_calories(), self.entry.activity_count())
    }
}

pub fn rank_entries(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry {
            rank: i + 1,
            entry: entry.clone(),
        })
        .collect()
}

/// Calories per activity rounded to the nearest integer; 0 with no activities
pub fn average_calories(total_calories: f64, activity_count: f64) -> i64 {
    if activity_count <= 0.0 {
        return 0;
    }
    (total_calories / activity_count).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_as;
    use serde_json::json;

    #[test]
    fn test_rank_follows_received_order() {
        let entries: Vec<LeaderboardEntry> = normalize_as(json!([
            { "username": "low", "total_calories": 10 },
            { "username": "high", "total_calories": 9000 },
            { "username": "tie", "total_calories": 9000 },
            { "username": "fourth" }
        ]));
        let ranked = rank_entries(&entries);
        let names: Vec<_> = ranked.iter().filter_map(|r| r.entry.username()).collect();
        assert_eq!(names, ["low", "high", "tie", "fourth"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[3].rank, 4);
    }

    #[test]
    fn test_medals_and_classes() {
        let entries: Vec<LeaderboardEntry> = normalize_as(json!([{}, {}, {}, {}]));
        let ranked = rank_entries(&entries);
        assert_eq!(ranked[0].rank_label(), "🥇");
        assert_eq!(ranked[2].rank_label(), "🥉");
        assert_eq!(ranked[3].rank_label(), "4");
        assert_eq!(ranked[0].rank_badge_class(), "bg-warning text-dark");
        assert_eq!(ranked[3].rank_badge_class(), "bg-primary");
        assert!(ranked[2].is_podium());
        assert!(!ranked[3].is_podium());
    }

    #[test]
    fn test_average_guards_zero_count() {
        assert_eq!(average_calories(100.0, 0.0), 0);
        assert_eq!(average_calories(1000.0, 3.0), 333);
        assert_eq!(average_calories(1000.0, 6.0), 167);
    }

    #[test]
    fn test_fractional_count_divides_unrounded() {
        let entries: Vec<LeaderboardEntry> = normalize_as(json!([{ "total_calories": 100, "activity_count": 2.5 }]));
        let ranked = rank_entries(&entries);
        assert_eq!(ranked[0].entry.activity_count(), 2.5);
        assert_eq!(ranked[0].average_calories(), 40);
    }

    #[test]
    fn test_missing_totals_default_to_zero() {
        let entries: Vec<LeaderboardEntry> = normalize_as(json!([{ "total_calories": 100, "activity_count": 0 }, {}]));
        let ranked = rank_entries(&entries);
        assert_eq!(ranked[0].average_calories(), 0);
        assert_eq!(ranked[1].entry.total_calories(), 0.0);
        assert_eq!(ranked[1].entry.activity_count(), 0.0);
    }
}
