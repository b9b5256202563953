//! Team Entity

use serde::{Deserialize, Serialize};

use crate::endpoint::Collection;
use crate::entity::Entity;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(Record);

impl Team {
    pub const ID: &'static [&'static str] = &["id"];
    pub const NAME: &'static [&'static str] = &["name"];
    pub const DESCRIPTION: &'static [&'static str] = &["description"];
    pub const MEMBERS: &'static str = "members";
    pub const CREATED_AT: &'static [&'static str] = &["created_at"];

    pub fn id(&self) -> Option<String> {
        self.0.display(Self::ID)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.text(Self::NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.text(Self::DESCRIPTION)
    }

    /// 0 when `members` is absent or not an array
    pub fn member_count(&self) -> usize {
        self.0.array_len(Self::MEMBERS)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.0.text(Self::CREATED_AT)
    }
}

impl From<Record> for Team {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl Entity for Team {
    const COLLECTION: Collection = Collection::Teams;

    fn key(&self) -> Option<String> {
        self.id()
    }
}
