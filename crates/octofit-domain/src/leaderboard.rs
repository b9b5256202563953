//! Leaderboard Entry Entity

use serde::{Deserialize, Serialize};

use crate::endpoint::Collection;
use crate::entity::Entity;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaderboardEntry(Record);

impl LeaderboardEntry {
    pub const USER_ID: &'static [&'static str] = &["user_id"];
    pub const USERNAME: &'static [&'static str] = &["username"];
    pub const TOTAL_CALORIES: &'static [&'static str] = &["total_calories"];
    pub const ACTIVITY_COUNT: &'static [&'static str] = &["activity_count"];

    pub fn user_id(&self) -> Option<String> {
        self.0.display(Self::USER_ID)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.text(Self::USERNAME)
    }

    pub fn total_calories(&self) -> f64 {
        self.0.number(Self::TOTAL_CALORIES).unwrap_or(0.0)
    }

    /// As received, 0 when absent. Negative counts read as 0.
    pub fn activity_count(&self) -> f64 {
        self.0.number(Self::ACTIVITY_COUNT).map_or(0.0, |n| n.max(0.0))
    }
}

impl From<Record> for LeaderboardEntry {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl Entity for LeaderboardEntry {
    const COLLECTION: Collection = Collection::Leaderboard;

    fn key(&self) -> Option<String> {
        self.user_id()
    }
}
