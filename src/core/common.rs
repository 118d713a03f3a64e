//! Common types: board errors and shot outcomes.

use core::fmt;

use super::bitboard::BitBoardError;
use super::ship::ShipKind;

/// Result of a single shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The shot struck a live segment; the whole ship, `sunk` cells long, went down.
    Hit { kind: ShipKind, sunk: u8 },
    /// Open water, or a ship that was already sunk.
    Miss,
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }
}

/// A resolved shot: where it landed and what it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub row: u8,
    pub col: u8,
    pub outcome: ShotOutcome,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid index).
    BitBoardError(BitBoardError),
    /// Some segment of the ship would fall off the grid.
    OutOfBounds,
    /// Some segment of the ship lands on a cell that is not empty.
    Overlaps,
    /// The ship would touch another ship, edge- or corner-wise.
    TooClose,
    /// Rejection sampling gave up.
    PlacementExhausted { kind: ShipKind, attempts: usize },
    /// A textual board did not have 8 rows of 8 known glyphs.
    InvalidLayout,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::Overlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::TooClose => write!(f, "Ship placement touches another ship"),
            BoardError::PlacementExhausted { kind, attempts } => {
                write!(f, "Unable to place {} after {} attempts", kind, attempts)
            }
            BoardError::InvalidLayout => write!(f, "Board layout is malformed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
