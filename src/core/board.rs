//! The 8×8 board: cell grid, gap-rule placement and flood-fill sinking.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use log::{debug, trace};
use rand::Rng;

use super::bitboard::{neighbours4, BitBoard, BitBoardError};
use super::common::{BoardError, ShotOutcome};
use super::config::{FLEET, GRID_CELLS, GRID_SIZE, MAX_FLEET_ATTEMPTS, MAX_PLACEMENT_ATTEMPTS};
use super::ship::{Orientation, Placement, ShipKind};

type BB = BitBoard<u64, GRID_SIZE>;

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Live part of a ship.
    Segment(ShipKind),
    /// Part of a ship that has gone down.
    Sunk,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Segment(kind) => kind.symbol(),
            Cell::Sunk => 'X',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'O' => Some(Cell::Empty),
            'X' => Some(Cell::Sunk),
            other => ShipKind::from_symbol(other).map(Cell::Segment),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The cells of one ship, as found by walking same-kind neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipCells {
    pub kind: ShipKind,
    pub mask: BB,
}

impl ShipCells {
    pub fn len(&self) -> usize {
        self.mask.count_ones()
    }

    /// True when the cells form one unbroken horizontal or vertical run.
    pub fn is_straight(&self) -> bool {
        let mut cells = self.mask.iter_set_bits();
        let Some((r0, c0)) = cells.next() else {
            return false;
        };
        let len = self.len();
        let horizontal = self.mask.iter_set_bits().all(|(r, _)| r == r0);
        let vertical = self.mask.iter_set_bits().all(|(_, c)| c == c0);
        // iter_set_bits is row-major, so the first cell is the bow
        let orientation = match (horizontal, vertical) {
            (true, _) => Orientation::Horizontal,
            (false, true) => Orientation::Vertical,
            (false, false) => return false,
        };
        match Placement::new(self.kind, r0, c0, orientation).mask() {
            Ok(mask) => mask == self.mask && len == self.kind.length(),
            Err(_) => false,
        }
    }
}

/// An 8×8 grid of cells. Ships only exist as runs of same-kind segments.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (all open water).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Generate a board carrying the standard fleet.
    ///
    /// Ships are placed in [`FLEET`] order by rejection sampling. If a ship
    /// cannot be placed within its attempt budget the board is thrown away
    /// and a fresh one started, up to [`MAX_FLEET_ATTEMPTS`] times.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut board = Board::new();
            match board.place_fleet(rng) {
                Ok(()) => return Ok(board),
                Err(err @ BoardError::PlacementExhausted { .. }) if attempt < MAX_FLEET_ATTEMPTS => {
                    debug!("fleet attempt {} abandoned: {}", attempt, err);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Place every ship of [`FLEET`] onto this board, in order.
    pub fn place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for kind in FLEET {
            self.place_ship(rng, kind)?;
        }
        Ok(())
    }

    /// Place one ship of `kind` at a random position that satisfies the gap
    /// rule against everything already on the board.
    pub fn place_ship<R: Rng>(&mut self, rng: &mut R, kind: ShipKind) -> Result<Placement, BoardError> {
        let placement = self.random_placement(rng, kind)?;
        self.place(placement)?;
        Ok(placement)
    }

    /// Sample a uniformly random start cell and orientation until the result
    /// is a legal placement for `kind`.
    pub fn random_placement<R: Rng>(&self, rng: &mut R, kind: ShipKind) -> Result<Placement, BoardError> {
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let index = rng.random_range(0..GRID_CELLS);
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let placement = Placement::from_index(kind, index, orientation);
            match self.check(&placement) {
                Ok(_) => {
                    trace!("{} placed at {:?} after {} attempts", kind, placement.origin(), attempt);
                    return Ok(placement);
                }
                Err(err) => trace!("rejected {:?}: {}", placement, err),
            }
        }
        Err(BoardError::PlacementExhausted {
            kind,
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Validate a placement against the current board and return its mask.
    ///
    /// Every segment must be on the grid and on open water, and no cell
    /// around the ship (diagonals included) may hold anything.
    pub fn check(&self, placement: &Placement) -> Result<BB, BoardError> {
        let mask = placement.mask()?;
        let occupied = self.occupied();
        if mask.intersects(&occupied) {
            return Err(BoardError::Overlaps);
        }
        if mask.halo().intersects(&occupied) {
            return Err(BoardError::TooClose);
        }
        Ok(mask)
    }

    /// Place a ship at an explicit position.
    pub fn place(&mut self, placement: Placement) -> Result<(), BoardError> {
        let mask = self.check(&placement)?;
        for (r, c) in mask.iter_set_bits() {
            self.cells[r][c] = Cell::Segment(placement.kind());
        }
        Ok(())
    }

    /// Cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(BitBoardError::IndexOutOfBounds { row, col }.into());
        }
        Ok(self.cells[row][col])
    }

    /// Grid rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Every cell that is not open water: live segments and sunk wreckage.
    pub fn occupied(&self) -> BB {
        self.mask_where(|cell| !cell.is_empty())
    }

    /// Cells still holding a live ship segment.
    pub fn live_segments(&self) -> BB {
        self.mask_where(|cell| matches!(cell, Cell::Segment(_)))
    }

    pub fn sunk_cells(&self) -> BB {
        self.mask_where(|cell| cell == Cell::Sunk)
    }

    fn mask_where(&self, pred: impl Fn(Cell) -> bool) -> BB {
        let mut mask = BB::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if pred(*cell) {
                    mask.insert(r, c);
                }
            }
        }
        mask
    }

    /// Pick a uniformly random cell to shoot at.
    pub fn random_target<R: Rng>(rng: &mut R) -> (usize, usize) {
        let index = rng.random_range(0..GRID_CELLS);
        (index / GRID_SIZE, index % GRID_SIZE)
    }

    /// Resolve a shot at `(row, col)`.
    ///
    /// Striking any live segment sinks the whole ship at once. Open water and
    /// wreckage are misses and leave the board untouched.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        match self.get(row, col)? {
            Cell::Segment(kind) => {
                let sunk = self.sink(row, col);
                Ok(ShotOutcome::Hit { kind, sunk })
            }
            Cell::Empty | Cell::Sunk => Ok(ShotOutcome::Miss),
        }
    }

    /// Turn the ship containing `(row, col)` into wreckage. Returns the number
    /// of cells sunk, zero if the cell holds no live segment.
    pub fn sink(&mut self, row: usize, col: usize) -> u8 {
        let Ok(Cell::Segment(kind)) = self.get(row, col) else {
            return 0;
        };
        let ship = self.ship_mask(row, col, kind);
        for (r, c) in ship.iter_set_bits() {
            self.cells[r][c] = Cell::Sunk;
        }
        ship.count_ones() as u8
    }

    /// Collect the 4-connected run of `kind` segments containing `(row, col)`.
    ///
    /// Explicit work-list: every cell is pushed at most once, so a
    /// grid-sized stack is always enough.
    fn ship_mask(&self, row: usize, col: usize, kind: ShipKind) -> BB {
        let target = Cell::Segment(kind);
        let mut seen = BB::new();
        let mut stack = [(0usize, 0usize); GRID_CELLS];
        let mut len = 0;

        seen.insert(row, col);
        stack[len] = (row, col);
        len += 1;

        while len > 0 {
            len -= 1;
            let (r, c) = stack[len];
            for (nr, nc) in neighbours4::<GRID_SIZE>(r, c) {
                if self.cells[nr][nc] == target && !seen.contains(nr, nc) {
                    seen.insert(nr, nc);
                    stack[len] = (nr, nc);
                    len += 1;
                }
            }
        }
        seen
    }

    /// All live ships on the board, bow-first in row-major order.
    pub fn ships(&self) -> Vec<ShipCells> {
        let mut seen = BB::new();
        let mut ships = Vec::new();
        for (r, c) in self.live_segments().iter_set_bits() {
            if seen.contains(r, c) {
                continue;
            }
            if let Cell::Segment(kind) = self.cells[r][c] {
                let mask = self.ship_mask(r, c, kind);
                seen = seen | mask;
                ships.push(ShipCells { kind, mask });
            }
        }
        ships
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        fmt::Display::fmt(self, f)?;
        write!(f, "\n}}")
    }
}

/// Parses the same glyph layout [`Board`] displays: eight lines of eight
/// whitespace-separated glyphs. No placement rules are checked.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());
        for row in board.cells.iter_mut() {
            let line = lines.next().ok_or(BoardError::InvalidLayout)?;
            let mut glyphs = line.split_whitespace();
            for cell in row.iter_mut() {
                let glyph = glyphs.next().ok_or(BoardError::InvalidLayout)?;
                let mut chars = glyph.chars();
                let ch = chars.next().ok_or(BoardError::InvalidLayout)?;
                if chars.next().is_some() {
                    return Err(BoardError::InvalidLayout);
                }
                *cell = Cell::from_symbol(ch).ok_or(BoardError::InvalidLayout)?;
            }
            if glyphs.next().is_some() {
                return Err(BoardError::InvalidLayout);
            }
        }
        if lines.next().is_some() {
            return Err(BoardError::InvalidLayout);
        }
        Ok(board)
    }
}
