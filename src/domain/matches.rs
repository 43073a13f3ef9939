use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const WINNER: &str = "winner";
pub const TIMESTAMP: &str = "timestamp";
pub const STANDINGS: &str = "standings";

/// Result document for one completed game.
///
/// The shape is left to the client; the server only relies on `winner`,
/// `timestamp` and the names listed under `standings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord(Map<String, Value>);

impl MatchRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn winner(&self) -> Option<&Value> {
        self.0.get(WINNER)
    }

    pub fn has_winner(&self) -> bool {
        self.winner().is_some_and(is_truthy)
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner().and_then(Value::as_str)
    }

    /// Sort key; anything but a string counts as the empty string
    pub fn timestamp(&self) -> &str {
        self.0.get(TIMESTAMP).and_then(Value::as_str).unwrap_or("")
    }

    /// Names found in the `standings` list
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.0
            .get(STANDINGS)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
    }

    pub fn involves(&self, name: &str) -> bool {
        self.participants().any(|participant| participant == name)
    }
}

/// Newest first by timestamp string; equal timestamps keep insertion order
pub fn sort_newest_first(matches: &mut [MatchRecord]) {
    matches.sort_by(|a, b| b.timestamp().cmp(a.timestamp()));
}

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
