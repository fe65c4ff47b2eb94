use serde::{Deserialize, Serialize};
use crate::models::RoundSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Start a round, or restart the current one
    StartRound,
    SubmitWord {
        word: String,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoundState {
        round: RoundSnapshot,
    },
    WordAccepted {
        word: String,
        points: u32,
        score: u32,
    },
    WordRejected {
        kind: String,
        title: String,
        message: String,
    },
    Error {
        message: String,
    },
}
