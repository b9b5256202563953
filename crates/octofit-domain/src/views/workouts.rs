//! Workouts View

use crate::views::filter::{distinct_values, ChoiceFilter};
use crate::workout::Workout;

/// Difficulty levels, recognised case-insensitively with synonyms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Unrecognized,
}

impl Difficulty {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("beginner") | Some("easy") => Difficulty::Beginner,
            Some("intermediate") | Some("medium") => Difficulty::Intermediate,
            Some("advanced") | Some("hard") => Difficulty::Advanced,
            _ => Difficulty::Unrecognized,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "bg-success",
            Difficulty::Intermediate => "bg-warning text-dark",
            Difficulty::Advanced => "bg-danger",
            Difficulty::Unrecognized => "bg-secondary",
        }
    }
}

pub fn difficulty_badge_class(label: Option<&str>) -> &'static str {
    Difficulty::from_label(label).badge_class()
}

/// Difficulty labels for the filter dropdown
pub fn difficulties(workouts: &[Workout]) -> Vec<String> {
    distinct_values(workouts.iter().map(Workout::difficulty))
}

pub fn filter_workouts<'a>(workouts: &'a [Workout], filter: &ChoiceFilter) -> Vec<&'a Workout> {
    workouts
        .iter()
        .filter(|w| filter.accepts(w.difficulty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_as;
    use serde_json::json;

    #[test]
    fn test_badge_classes() {
        assert_eq!(difficulty_badge_class(Some("Beginner")), "bg-success");
        assert_eq!(difficulty_badge_class(Some("EASY")), "bg-success");
        assert_eq!(difficulty_badge_class(Some("medium")), "bg-warning text-dark");
        assert_eq!(difficulty_badge_class(Some("Hard")), "bg-danger");
        assert_eq!(difficulty_badge_class(Some("extreme")), "bg-secondary");
        assert_eq!(difficulty_badge_class(None), "bg-secondary");
    }

    #[test]
    fn test_difficulties_and_filter() {
        let workouts: Vec<Workout> = normalize_as(json!([
            { "name": "Yoga", "difficulty": "Easy" },
            { "name": "HIIT", "difficulty_level": "Hard" },
            { "name": "Walk", "difficulty": "Easy" },
            { "name": "Mystery" }
        ]));
        assert_eq!(difficulties(&workouts), vec!["Easy", "Hard"]);

        let hard = filter_workouts(&workouts, &ChoiceFilter::from_choice("Hard"));
        assert_eq!(hard.len(), 1);
        assert_eq!(hard[0].name(), Some("HIIT"));
        assert_eq!(filter_workouts(&workouts, &ChoiceFilter::All).len(), 4);
    }
}
