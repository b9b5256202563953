//! Opaque API Records
//!
//! A record is one element of a collection response, kept exactly as received.
//! Reads go through ordered candidate field lists: the first candidate that is
//! present, non-null and of the expected shape wins. A numeric `0` is a real
//! value and never falls through to the next candidate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One read-only record from a collection endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw member lookup. Non-object records have no fields.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.as_object()?.get(field).filter(|v| !v.is_null())
    }

    /// First candidate holding a non-empty string
    pub fn text(&self, candidates: &[&str]) -> Option<&str> {
        candidates
            .iter()
            .filter_map(|field| self.get(field).and_then(Value::as_str))
            .find(|s| !s.is_empty())
    }

    /// First candidate that can be shown as text (strings, numbers, booleans)
    pub fn display(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .filter_map(|field| self.get(field))
            .find_map(display_scalar)
    }

    /// First candidate holding a finite number, or a string that parses as one.
    /// `"NaN"` and `"inf"` are skipped like any other non-number.
    pub fn number(&self, candidates: &[&str]) -> Option<f64> {
        candidates
            .iter()
            .filter_map(|field| self.get(field))
            .find_map(finite_number)
    }

    /// Array member, if the field holds one
    pub fn array(&self, field: &str) -> Option<&[Value]> {
        self.get(field).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// Length of an array member, 0 when absent or not an array
    pub fn array_len(&self, field: &str) -> usize {
        self.array(field).map_or(0, <[Value]>::len)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
