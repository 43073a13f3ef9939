use anyhow::{anyhow, Result};
use log::info;
use std::sync::{Mutex, MutexGuard};

use super::document::JsonDocument;
use crate::config::StorageSettings;
use crate::domain::{sort_newest_first, HeadToHead, MatchRecord};

/// Append-only list of match records, backed by `matches.json`
pub struct MatchLog {
    document: Mutex<JsonDocument<Vec<MatchRecord>>>,
}

impl MatchLog {
    pub fn new(settings: &StorageSettings) -> Self {
        let document = JsonDocument::new(settings.matches_path(), "match list", settings.on_corrupt);
        Self {
            document: Mutex::new(document),
        }
    }

    /// All matches, newest first
    pub fn list(&self) -> Result<Vec<MatchRecord>> {
        let mut matches = self.lock()?.load()?;
        sort_newest_first(&mut matches);
        Ok(matches)
    }

    pub fn append(&self, record: MatchRecord) -> Result<()> {
        let document = self.lock()?;
        let mut matches = document.load()?;

        matches.push(record);
        document.save(&matches)?;

        info!("Saved match record, {} matches on record", matches.len());
        Ok(())
    }

    pub fn head_to_head(&self, player1: &str, player2: &str) -> Result<HeadToHead> {
        let matches = self.lock()?.load()?;
        Ok(HeadToHead::tally(&matches, player1, player2))
    }

    fn lock(&self) -> Result<MutexGuard<'_, JsonDocument<Vec<MatchRecord>>>> {
        self.document
            .lock()
            .map_err(|_| anyhow!("Match log lock poisoned"))
    }
}
