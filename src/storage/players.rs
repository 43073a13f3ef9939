use anyhow::{anyhow, Result};
use log::info;
use serde_json::Value;
use std::sync::Mutex;

use super::document::JsonDocument;
use crate::config::StorageSettings;
use crate::domain::{PlayerTable, PlayerUpdate};

/// Player name -> stats record, backed by `players.json`
pub struct PlayerRegistry {
    document: Mutex<JsonDocument<PlayerTable>>,
}

impl PlayerRegistry {
    pub fn new(settings: &StorageSettings) -> Self {
        let document = JsonDocument::new(settings.players_path(), "player table", settings.on_corrupt);
        Self {
            document: Mutex::new(document),
        }
    }

    pub fn list(&self) -> Result<Vec<Value>> {
        let document = self.lock()?;
        Ok(document.load()?.records())
    }

    /// Merge a batch of partial records and persist once.
    /// Returns the number of items in the batch.
    pub fn upsert_batch(&self, updates: &[PlayerUpdate]) -> Result<usize> {
        let document = self.lock()?;
        let mut table = document.load()?;

        let processed = table.apply_batch(updates);
        document.save(&table)?;

        info!("Saved {} player updates, {} players on record", processed, table.len());
        Ok(processed)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, JsonDocument<PlayerTable>>> {
        self.document
            .lock()
            .map_err(|_| anyhow!("Player registry lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn settings(dir: &TempDir) -> StorageSettings {
        StorageSettings {
            data_dir: dir.path().to_path_buf(),
            ..StorageSettings::default()
        }
    }

    #[test]
    fn test_updates_survive_a_new_registry() {
        let temp_dir = TempDir::new().unwrap();
        let batch: Vec<PlayerUpdate> =
            serde_json::from_value(json!([{"name": "Alice", "gamesWon": 2}, {"gamesWon": 9}])).unwrap();

        let processed = PlayerRegistry::new(&settings(&temp_dir)).upsert_batch(&batch).unwrap();
        let players = PlayerRegistry::new(&settings(&temp_dir)).list().unwrap();

        assert_eq!(processed, 2);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0]["gamesWon"], json!(2));
        assert_eq!(players[0]["totalDartsThrown"], json!(0));
    }

    #[test]
    fn test_sequential_batches_accumulate() {
        let temp_dir = TempDir::new().unwrap();
        let registry = PlayerRegistry::new(&settings(&temp_dir));

        let first: Vec<PlayerUpdate> = serde_json::from_value(json!([{"name": "Alice"}])).unwrap();
        let second: Vec<PlayerUpdate> =
            serde_json::from_value(json!([{"name": "Bob"}, {"name": "Alice", "gamesPlayed": 3}])).unwrap();
        registry.upsert_batch(&first).unwrap();
        registry.upsert_batch(&second).unwrap();

        let players = registry.list().unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0]["name"], json!("Alice"));
        assert_eq!(players[0]["gamesPlayed"], json!(3));
        assert_eq!(players[1]["name"], json!("Bob"));
    }

    #[test]
    fn test_list_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = settings(&temp_dir);

        assert!(PlayerRegistry::new(&config).list().unwrap().is_empty());
        assert!(config.players_path().exists());
    }
}
