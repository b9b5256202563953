//! Workout Entity
//!
//! Workouts carry a free-form difficulty label and a list of exercises that
//! may be structured objects or plain strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::Collection;
use crate::entity::Entity;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workout(Record);

impl Workout {
    pub const ID: &'static [&'static str] = &["_id", "id"];
    pub const NAME: &'static [&'static str] = &["name"];
    pub const DESCRIPTION: &'static [&'static str] = &["description"];
    pub const KIND: &'static [&'static str] = &["type", "category"];
    pub const DIFFICULTY: &'static [&'static str] = &["difficulty", "difficulty_level"];
    pub const DURATION: &'static [&'static str] = &["duration"];
    pub const EXERCISES: &'static str = "exercises";

    pub fn id(&self) -> Option<String> {
        self.0.display(Self::ID)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.text(Self::NAME)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.text(Self::DESCRIPTION)
    }

    /// `type`, falling back to `category`
    pub fn kind(&self) -> Option<&str> {
        self.0.text(Self::KIND)
    }

    /// `difficulty`, falling back to `difficulty_level`
    pub fn difficulty(&self) -> Option<&str> {
        self.0.text(Self::DIFFICULTY)
    }

    pub fn duration(&self) -> Option<String> {
        self.0.display(Self::DURATION)
    }

    /// 0 when `exercises` is absent or not an array
    pub fn exercise_count(&self) -> usize {
        self.0.array_len(Self::EXERCISES)
    }

    pub fn exercises(&self) -> Vec<Exercise> {
        self.0
            .array(Self::EXERCISES)
            .unwrap_or_default()
            .iter()
            .map(Exercise::from_value)
            .collect()
    }
}

impl From<Record> for Workout {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl Entity for Workout {
    const COLLECTION: Collection = Collection::Workouts;

    fn key(&self) -> Option<String> {
        self.id()
    }
}

/// One entry of a workout's exercise list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Exercise {
    pub name: String,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
}

impl Exercise {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::String(name) => Self {
                name: name.clone(),
                ..Default::default()
            },
            Value::Object(_) => {
                let record = Record::new(value.clone());
                Self {
                    name: record
                        .display(&["name"])
                        .unwrap_or_else(|| "Unnamed exercise".to_string()),
                    sets: record.display(&["sets"]),
                    reps: record.display(&["reps"]),
                    description: record.display(&["description"]),
                    duration: record.display(&["duration"]),
                }
            }
            other => Self {
                name: other.to_string(),
                ..Default::default()
            },
        }
    }

    /// "3 sets × 12 reps", only when both parts are known
    pub fn sets_and_reps(&self) -> Option<String> {
        match (&self.sets, &self.reps) {
            (Some(sets), Some(reps)) => Some(format!("{} sets × {} reps", sets, reps)),
            _ => None,
        }
    }
}
