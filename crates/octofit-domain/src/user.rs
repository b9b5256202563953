//! User Entity

use serde::{Deserialize, Serialize};

use crate::endpoint::Collection;
use crate::entity::Entity;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Record);

impl User {
    pub const ID: &'static [&'static str] = &["id"];
    pub const USERNAME: &'static [&'static str] = &["username"];
    pub const NAME: &'static [&'static str] = &["name"];
    pub const EMAIL: &'static [&'static str] = &["email"];
    pub const FITNESS_GOAL: &'static [&'static str] = &["fitness_goal"];
    pub const TEAM: &'static [&'static str] = &["team"];

    pub fn id(&self) -> Option<String> {
        self.0.display(Self::ID)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.text(Self::USERNAME)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.text(Self::NAME)
    }

    pub fn email(&self) -> Option<&str> {
        self.0.text(Self::EMAIL)
    }

    pub fn fitness_goal(&self) -> Option<&str> {
        self.0.text(Self::FITNESS_GOAL)
    }

    /// Team may be sent as a name or as a numeric id
    pub fn team(&self) -> Option<String> {
        self.0.display(Self::TEAM)
    }
}

impl From<Record> for User {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl Entity for User {
    const COLLECTION: Collection = Collection::Users;

    fn key(&self) -> Option<String> {
        self.id()
    }
}
