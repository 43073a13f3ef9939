use serde::{Deserialize, Serialize};

use crate::domain::HeadToHead;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
pub struct HeadToHeadParams {
    pub player1: Option<String>,
    pub player2: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadResponse {
    pub player1: String,
    pub player2: String,
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub total_matches: usize,
}

impl HeadToHeadResponse {
    pub fn new(player1: String, player2: String, record: HeadToHead) -> Self {
        Self {
            player1,
            player2,
            player1_wins: record.player1_wins,
            player2_wins: record.player2_wins,
            total_matches: record.total_matches,
        }
    }
}
