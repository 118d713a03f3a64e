use super::ship::ShipKind;

pub const GRID_SIZE: usize = 8;
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
pub const NUM_SHIPS: usize = 5;

/// Ships placed on every board, in placement order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
];

/// Total number of ship segments on a fully placed board.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2;

/// Rejection-sampling budget for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// How many times a whole fleet is re-rolled from an empty board before giving up.
pub const MAX_FLEET_ATTEMPTS: usize = 32;

/// Sentinel passed between seats to grant the next turn.
pub const HANDOFF_TOKEN: [u8; 2] = *b"go";

/// Count how many ships of `kind` the standard fleet carries.
pub fn fleet_count(kind: ShipKind) -> usize {
    FLEET.iter().filter(|k| **k == kind).count()
}
