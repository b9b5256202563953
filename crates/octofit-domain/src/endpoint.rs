//! Collection Endpoints
//!
//! The five REST collections the dashboard reads, with their API path,
//! client route and navigation label.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Activities,
    Teams,
    Leaderboard,
    Workouts,
}

impl Collection {
    /// Navigation order
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Activities,
        Collection::Teams,
        Collection::Leaderboard,
        Collection::Workouts,
    ];

    /// Path segment under `/api/`
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Activities => "activities",
            Collection::Teams => "teams",
            Collection::Leaderboard => "leaderboard",
            Collection::Workouts => "workouts",
        }
    }

    /// Client-side route
    pub fn route(&self) -> &'static str {
        match self {
            Collection::Users => "/users",
            Collection::Activities => "/activities",
            Collection::Teams => "/teams",
            Collection::Leaderboard => "/leaderboard",
            Collection::Workouts => "/workouts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Users => "Users",
            Collection::Activities => "Activities",
            Collection::Teams => "Teams",
            Collection::Leaderboard => "Leaderboard",
            Collection::Workouts => "Workouts",
        }
    }

    /// `<base>/api/<collection>/`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/api/{}/", base_url.trim_end_matches('/'), self.as_str())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            Collection::Teams.url("https://demo-8000.app.github.dev"),
            "https://demo-8000.app.github.dev/api/teams/"
        );
        assert_eq!(
            Collection::Leaderboard.url("http://localhost:8000/"),
            "http://localhost:8000/api/leaderboard/"
        );
    }

    #[test]
    fn test_routes_are_distinct() {
        let mut routes: Vec<_> = Collection::ALL.iter().map(|c| c.route()).collect();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), Collection::ALL.len());
    }
}
