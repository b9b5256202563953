//! Response Normalization
//!
//! Accepts a bare array or an envelope exposing `results`. Anything else
//! becomes an empty collection.

use serde_json::Value;

use crate::entity::Entity;
use crate::record::Record;

pub fn normalize(value: Value) -> Vec<Record> {
    let candidate = match value {
        Value::Object(mut map) => match map.remove("results") {
            Some(results) if !results.is_null() => results,
            _ => Value::Object(map),
        },
        other => other,
    };

    match candidate {
        Value::Array(items) => items.into_iter().map(Record::new).collect(),
        other => {
            tracing::debug!(kind = json_kind(&other), "response is not a collection, treating as empty");
            Vec::new()
        }
    }
}

pub fn normalize_as<T: Entity>(value: Value) -> Vec<T> {
    normalize(value).into_iter().map(T::from).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
