pub mod head_to_head;
pub mod matches;
pub mod players;

pub use head_to_head::HeadToHead;
pub use matches::{sort_newest_first, MatchRecord};
pub use players::{PlayerTable, PlayerUpdate};
