//! Commonly used types and utilities for ease of import.

pub use crate::core::{Board, Fleet, MatchState, MatchStatus, Seat, ShipKind, ShotOutcome};
pub use crate::player::{Player, RandomPlayer};

#[cfg(feature = "std")]
pub use crate::player::{GameStatus, PlayerNode};

#[cfg(feature = "std")]
pub use crate::runner::{run_duel, seeded_rng, MatchRunner};

#[cfg(feature = "std")]
pub use crate::transport::{in_memory::InMemoryTransport, Transport};
