//! Derived Views
//!
//! Filters and aggregates recomputed from the held collection on every render.

mod filter;
pub mod activities;
pub mod users;
pub mod teams;
pub mod leaderboard;
pub mod workouts;

pub use filter::{distinct_values, ChoiceFilter, ALL};
