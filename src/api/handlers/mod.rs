use crate::config::settings::AppConfig;
use crate::storage::{MatchLog, PlayerRegistry};

pub mod health;
pub mod matches;
pub mod players;

pub struct AppState {
    pub config: AppConfig,
    pub players: PlayerRegistry,
    pub matches: MatchLog,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            players: PlayerRegistry::new(&config.storage),
            matches: MatchLog::new(&config.storage),
            config,
        }
    }
}
