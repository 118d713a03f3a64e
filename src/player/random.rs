use crate::core::{board::Board, common::BoardError};
use rand::rngs::SmallRng;

use super::Player;

/// Player with no strategy: random fleet, uniformly random shots, no memory
/// of where it has already fired.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        *board = Board::generate(rng)?;
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> (usize, usize) {
        Board::random_target(rng)
    }
}
