#![cfg(feature = "std")]

use serde::{Deserialize, Serialize};

use crate::core::common::ShotOutcome;

pub use crate::core::config::HANDOFF_TOKEN;

/// Messages exchanged between the two seats of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Grants the receiver the next turn. `token` must equal [`HANDOFF_TOKEN`].
    Handoff { token: [u8; 2] },
    /// A shot at the receiver's board.
    Shot { seq: u64, row: u8, col: u8 },
    /// The receiver's answer to `Shot` with the same `seq`, carrying the ship
    /// count left on its board.
    ShotResult {
        seq: u64,
        outcome: ShotOutcome,
        remaining: u8,
    },
}

impl Message {
    pub fn handoff() -> Self {
        Message::Handoff {
            token: HANDOFF_TOKEN,
        }
    }
}
