use std::path::PathBuf;

use clap::ValueEnum;

/// Development fallback used when no API key is configured.
pub const DEFAULT_API_KEY: &str = "your-super-secret-key";

/// What to do with a data file that exists but cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CorruptionPolicy {
    /// Refuse to serve or overwrite the file
    #[default]
    Fail,
    /// Log a warning and carry on with an empty collection
    Empty,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub players_file: String,
    pub matches_file: String,
    pub on_corrupt: CorruptionPolicy,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            players_file: "players.json".to_string(),
            matches_file: "matches.json".to_string(),
            on_corrupt: CorruptionPolicy::Fail,
        }
    }
}

impl StorageSettings {
    pub fn players_path(&self) -> PathBuf {
        self.data_dir.join(&self.players_file)
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join(&self.matches_file)
    }
}

#[derive(Clone)]
pub struct AuthSettings {
    pub api_key: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl AuthSettings {
    pub fn uses_default_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub auth: AuthSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::default(),
            auth: AuthSettings::default(),
        }
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.storage.data_dir = data_dir.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth.api_key = api_key.into();
        self
    }

    pub fn with_corruption_policy(mut self, policy: CorruptionPolicy) -> Self {
        self.storage.on_corrupt = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_into_data_dir() {
        let config = AppConfig::new();

        assert_eq!(config.storage.players_path(), PathBuf::from("data/players.json"));
        assert_eq!(config.storage.matches_path(), PathBuf::from("data/matches.json"));
        assert_eq!(config.storage.on_corrupt, CorruptionPolicy::Fail);
        assert!(config.auth.uses_default_key());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::new()
            .with_data_dir("/tmp/darts")
            .with_api_key("hunter2")
            .with_corruption_policy(CorruptionPolicy::Empty);

        assert_eq!(config.storage.players_path(), PathBuf::from("/tmp/darts/players.json"));
        assert_eq!(config.storage.on_corrupt, CorruptionPolicy::Empty);
        assert!(!config.auth.uses_default_key());
    }
}
