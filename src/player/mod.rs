//! Player trait and implementations
//!
//! - RandomPlayer: places the standard fleet and shoots uniformly at random
//! - PlayerNode: runs one seat of a duel, combining a Player, its Fleet and a Transport

use crate::core::{
    board::Board,
    common::{BoardError, ShotOutcome},
};
use rand::rngs::SmallRng;

/// Interface implemented by the things that sit in a seat.
///
/// A Player is responsible for:
/// - Laying out its own board
/// - Choosing where to shoot
/// - Hearing back what its shots and the opponent's shots did
pub trait Player: Send {
    /// Lay out the fleet on `board`, replacing whatever it held.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next cell to shoot at on the opponent's board.
    fn select_target(&mut self, rng: &mut SmallRng) -> (usize, usize);

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_incoming_shot(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}

pub mod random;
pub use random::RandomPlayer;

#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub use node::{GameStatus, PlayerNode};
