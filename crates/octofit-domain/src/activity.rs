//! Activity Entity

use serde::{Deserialize, Serialize};

use crate::endpoint::Collection;
use crate::entity::Entity;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Activity(Record);

impl Activity {
    pub const ID: &'static [&'static str] = &["_id", "id"];
    pub const USER: &'static [&'static str] = &["user_id", "user"];
    pub const ACTIVITY_TYPE: &'static [&'static str] = &["activity_type"];
    pub const DURATION: &'static [&'static str] = &["duration"];
    pub const DISTANCE: &'static [&'static str] = &["distance"];
    pub const CALORIES: &'static [&'static str] = &["calories", "calories_burned"];
    pub const DATE: &'static [&'static str] = &["date"];

    pub fn id(&self) -> Option<String> {
        self.0.display(Self::ID)
    }

    pub fn user(&self) -> Option<String> {
        self.0.display(Self::USER)
    }

    pub fn activity_type(&self) -> Option<&str> {
        self.0.text(Self::ACTIVITY_TYPE)
    }

    /// Minutes as received, e.g. `30` or `"45 min"`
    pub fn duration(&self) -> Option<String> {
        self.0.display(Self::DURATION)
    }

    /// Kilometres, 0 when absent
    pub fn distance(&self) -> f64 {
        self.0.number(Self::DISTANCE).unwrap_or(0.0)
    }

    /// `calories`, then `calories_burned`, then 0
    pub fn calories(&self) -> f64 {
        self.0.number(Self::CALORIES).unwrap_or(0.0)
    }

    pub fn date(&self) -> Option<&str> {
        self.0.text(Self::DATE)
    }
}

impl From<Record> for Activity {
    fn from(record: Record) -> Self {
        Self(record)
    }
}

impl Entity for Activity {
    const COLLECTION: Collection = Collection::Activities;

    fn key(&self) -> Option<String> {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn activity(value: serde_json::Value) -> Activity {
        Activity::from(Record::new(value))
    }

    #[test]
    fn test_underscore_id_preferred() {
        let a = activity(json!({ "_id": "abc", "id": 7 }));
        assert_eq!(a.id().as_deref(), Some("abc"));
        let a = activity(json!({ "id": 7 }));
        assert_eq!(a.id().as_deref(), Some("7"));
    }

    #[test]
    fn test_calorie_fallback() {
        assert_eq!(activity(json!({ "calories": 100 })).calories(), 100.0);
        assert_eq!(activity(json!({ "calories_burned": 50 })).calories(), 50.0);
        assert_eq!(activity(json!({})).calories(), 0.0);
    }

    #[test]
    fn test_duration_kept_as_received() {
        assert_eq!(activity(json!({ "duration": 30 })).duration().as_deref(), Some("30"));
        assert_eq!(activity(json!({ "duration": "45 min" })).duration().as_deref(), Some("45 min"));
        assert_eq!(activity(json!({ "duration": null })).duration(), None);
    }

    #[test]
    fn test_user_fallback() {
        assert_eq!(activity(json!({ "user": "maria" })).user().as_deref(), Some("maria"));
        assert_eq!(activity(json!({})).user(), None);
    }
}
