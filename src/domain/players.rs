use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

pub const NAME: &str = "name";
pub const GAMES_PLAYED: &str = "gamesPlayed";
pub const GAMES_WON: &str = "gamesWon";
pub const TOTAL_POINTS_SCORED: &str = "totalPointsScored";
pub const TOTAL_DARTS_THROWN: &str = "totalDartsThrown";
pub const AVERAGE_HISTORY: &str = "averageHistory";
pub const TURN_SCORE_FREQUENCY: &str = "turnScoreFrequency";

/// Partial player record sent by a client.
///
/// Any field is accepted; only `name` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerUpdate(Fields);

impl PlayerUpdate {
    pub fn new(fields: Fields) -> Self {
        Self(fields)
    }

    /// Player name, if present as a non-empty string
    pub fn name(&self) -> Option<&str> {
        self.0
            .get(NAME)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }
}

/// Stats record for a player seen for the first time
pub fn seed_record(name: &str) -> Fields {
    let mut record = Map::new();
    record.insert(NAME.to_string(), Value::from(name));
    record.insert(GAMES_PLAYED.to_string(), Value::from(0));
    record.insert(GAMES_WON.to_string(), Value::from(0));
    record.insert(TOTAL_POINTS_SCORED.to_string(), Value::from(0));
    record.insert(TOTAL_DARTS_THROWN.to_string(), Value::from(0));
    record.insert(AVERAGE_HISTORY.to_string(), Value::Array(Vec::new()));
    record.insert(TURN_SCORE_FREQUENCY.to_string(), Value::Object(Map::new()));
    record
}

/// All player records keyed by name, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerTable(Fields);

impl PlayerTable {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Every record with the default fields; non-object entries from
    /// hand-edited files are listed as freshly seeded records
    pub fn records(&self) -> Vec<Value> {
        self.0
            .iter()
            .map(|(name, record)| match record {
                Value::Object(_) => record.clone(),
                _ => Value::Object(seed_record(name)),
            })
            .collect()
    }

    /// Merges one update into the table. Returns false when the update
    /// carries no usable name and was skipped.
    pub fn apply(&mut self, update: &PlayerUpdate) -> bool {
        let Some(name) = update.name() else {
            return false;
        };

        let entry = self
            .0
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(seed_record(name)));

        // hand-edited files may hold something other than an object here
        if !entry.is_object() {
            *entry = Value::Object(seed_record(name));
        }

        if let Value::Object(record) = entry {
            for (field, value) in update.fields() {
                record.insert(field.clone(), value.clone());
            }
        }
        true
    }

    /// Applies a batch in order and returns the batch length
    pub fn apply_batch(&mut self, updates: &[PlayerUpdate]) -> usize {
        for update in updates {
            self.apply(update);
        }
        updates.len()
    }
}
