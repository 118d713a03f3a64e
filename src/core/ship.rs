//! Ship kinds and straight-line placements on the grid.

use core::fmt;

use super::bitboard::BitBoard;
use super::common::BoardError;
use super::config::GRID_SIZE;

type BB = BitBoard<u64, GRID_SIZE>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Kind of ship. Every segment of a ship carries its kind; ships of the same
/// kind are told apart only by the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
}

impl ShipKind {
    /// Number of segments.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Single-letter glyph used when printing a board.
    pub const fn symbol(self) -> char {
        match self {
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'C',
            ShipKind::Destroyer => 'D',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'B' => Some(ShipKind::Battleship),
            'C' => Some(ShipKind::Cruiser),
            'D' => Some(ShipKind::Destroyer),
            _ => None,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate ship position: kind, bow cell and orientation.
///
/// Constructing a placement never fails; [`Placement::mask`] reports whether
/// the whole ship fits on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    kind: ShipKind,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Placement {
    pub const fn new(kind: ShipKind, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            kind,
            row,
            col,
            orientation,
        }
    }

    /// Placement starting at a row-major cell index in `0..GRID_CELLS`.
    pub const fn from_index(kind: ShipKind, index: usize, orientation: Orientation) -> Self {
        Self::new(kind, index / GRID_SIZE, index % GRID_SIZE, orientation)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the ship, bow first. Cells may lie off the grid.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.kind.length()).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Occupancy mask of the ship, or `OutOfBounds` if any segment falls off
    /// the grid.
    pub fn mask(&self) -> Result<BB, BoardError> {
        let mut mask = BB::new();
        for (r, c) in self.cells() {
            if r >= GRID_SIZE || c >= GRID_SIZE {
                return Err(BoardError::OutOfBounds);
            }
            mask.set(r, c)?;
        }
        Ok(mask)
    }
}
