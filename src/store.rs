//! View State Stores
//!
//! Each page keeps its UI state (filter, search term, open detail) in its own
//! `reactive_stores` container. Nothing is shared between pages.

use octofit_domain::views::ALL;
use octofit_domain::{DetailSelection, Team, Workout};
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct UsersView {
    /// Free-text search over username, name and email
    pub search: String,
}

#[derive(Clone, Debug, Store)]
pub struct ActivitiesView {
    /// Selected activity type, or `all`
    pub type_choice: String,
}

impl Default for ActivitiesView {
    fn default() -> Self {
        Self { type_choice: ALL.to_string() }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct TeamsView {
    pub detail: DetailSelection<Team>,
}

#[derive(Clone, Debug, Store)]
pub struct WorkoutsView {
    /// Selected difficulty, or `all`
    pub difficulty_choice: String,
    pub detail: DetailSelection<Workout>,
}

impl Default for WorkoutsView {
    fn default() -> Self {
        Self {
            difficulty_choice: ALL.to_string(),
            detail: DetailSelection::default(),
        }
    }
}
