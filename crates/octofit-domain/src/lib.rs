//! OctoFit Domain
//!
//! Everything the dashboard knows about its data, independent of the browser:
//! - records: opaque API records with ordered field fallbacks
//! - normalize: envelope/bare response handling
//! - state: the per-view fetch state machine
//! - views: filters and aggregates for each page

mod entity;
mod record;
mod user;
mod activity;
mod team;
mod leaderboard;
mod workout;
mod endpoint;
mod config;
mod error;
mod normalize;
mod state;
mod selection;
pub mod format;
pub mod views;

#[cfg(test)]
mod tests;

pub use entity::Entity;
pub use record::Record;
pub use user::User;
pub use activity::Activity;
pub use team::Team;
pub use leaderboard::LeaderboardEntry;
pub use workout::{Exercise, Workout};
pub use endpoint::Collection;
pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::FetchError;
pub use normalize::{normalize, normalize_as};
pub use state::FetchState;
pub use selection::DetailSelection;
