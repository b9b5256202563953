//! Activities View

use crate::activity::Activity;
use crate::views::filter::{distinct_values, ChoiceFilter};

/// Activity types for the filter dropdown
pub fn activity_types(activities: &[Activity]) -> Vec<String> {
    distinct_values(activities.iter().map(Activity::activity_type))
}

pub fn filter_activities<'a>(activities: &'a [Activity], filter: &ChoiceFilter) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|a| filter.accepts(a.activity_type()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityTotals {
    pub calories: f64,
    pub distance: f64,
    pub count: usize,
}

pub fn totals(activities: &[&Activity]) -> ActivityTotals {
    activities.iter().fold(ActivityTotals::default(), |acc, a| ActivityTotals {
        calories: acc.calories + a.calories(),
        distance: acc.distance + a.distance(),
        count: acc.count + 1,
    })
}

pub fn empty_message(filter: &ChoiceFilter) -> String {
    match filter {
        ChoiceFilter::All => "No activities found".to_string(),
        ChoiceFilter::Only(kind) => format!("No {} activities found", kind),
    }
}
