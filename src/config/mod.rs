pub mod settings;

pub use settings::{AppConfig, AuthSettings, CorruptionPolicy, StorageSettings, DEFAULT_API_KEY};
