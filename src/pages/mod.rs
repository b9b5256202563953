//! Pages
//!
//! One page per route. Each collection page owns its fetch and view state.

mod home;
mod users;
mod activities;
mod teams;
mod leaderboard;
mod workouts;

pub use home::{HomePage, NotFound};
pub use users::UsersPage;
pub use activities::ActivitiesPage;
pub use teams::TeamsPage;
pub use leaderboard::LeaderboardPage;
pub use workouts::WorkoutsPage;
