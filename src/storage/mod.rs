pub mod document;
pub mod matches;
pub mod players;

pub use document::JsonDocument;
pub use matches::MatchLog;
pub use players::PlayerRegistry;
