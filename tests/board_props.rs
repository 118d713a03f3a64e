use battleship_duel::{
    fleet_count, Board, Cell, Fleet, ShipKind, ShotOutcome, GRID_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    Board::generate(&mut rng).unwrap()
}

/// Textbook recursive sink over a raw grid.
fn sink_recursive(grid: &mut Grid, row: isize, col: isize, kind: ShipKind) {
    if row < 0 || col < 0 || row >= GRID_SIZE as isize || col >= GRID_SIZE as isize {
        return;
    }
    let (r, c) = (row as usize, col as usize);
    if grid[r][c] != Cell::Segment(kind) {
        return;
    }
    grid[r][c] = Cell::Sunk;
    sink_recursive(grid, row - 1, col, kind);
    sink_recursive(grid, row + 1, col, kind);
    sink_recursive(grid, row, col - 1, kind);
    sink_recursive(grid, row, col + 1, kind);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_fleet_has_standard_composition(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), NUM_SHIPS);
        prop_assert_eq!(board.live_segments().count_ones(), TOTAL_SHIP_CELLS);
        for kind in [ShipKind::Battleship, ShipKind::Cruiser, ShipKind::Destroyer] {
            let found = ships.iter().filter(|s| s.kind == kind).count();
            prop_assert_eq!(found, fleet_count(kind));
        }
        for ship in &ships {
            prop_assert!(ship.is_straight(), "{:?} is not a straight run", ship);
        }
    }

    #[test]
    fn generated_ships_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let ships = board.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                prop_assert!(!a.mask.halo().intersects(&b.mask), "{:?} touches {:?}", a, b);
            }
        }
    }

    #[test]
    fn hit_sinks_exactly_one_ship(seed in any::<u64>(), pick in 0..NUM_SHIPS, segment in 0..4usize) {
        let board = random_board(seed);
        let ships = board.ships();
        let target = ships[pick];
        let cells: Vec<_> = target.mask.iter_set_bits().collect();
        let (r, c) = cells[segment % cells.len()];

        let mut fleet = Fleet::new(board, NUM_SHIPS as u8);
        let shot = fleet.receive_shot(r, c).unwrap();
        prop_assert_eq!(shot.outcome, ShotOutcome::Hit { kind: target.kind, sunk: target.len() as u8 });
        prop_assert_eq!(fleet.remaining(), NUM_SHIPS as u8 - 1);
        prop_assert_eq!(fleet.board().sunk_cells(), target.mask);

        let survivors = fleet.board().ships();
        let expected: Vec<_> = ships.iter().filter(|s| s.mask != target.mask).copied().collect();
        prop_assert_eq!(survivors, expected);

        // shooting the wreck again changes nothing
        let before = *fleet.board();
        prop_assert_eq!(fleet.receive_shot(r, c).unwrap().outcome, ShotOutcome::Miss);
        prop_assert_eq!(fleet.remaining(), NUM_SHIPS as u8 - 1);
        prop_assert_eq!(*fleet.board(), before);
    }

    #[test]
    fn misses_never_change_the_fleet(seed in any::<u64>(), shots in 1..64usize) {
        let board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut fleet = Fleet::new(board, NUM_SHIPS as u8);
        let water = !board.occupied();
        let water: Vec<_> = water.iter_set_bits().collect();
        for _ in 0..shots {
            let (r, c) = water[rng.random_range(0..water.len())];
            prop_assert_eq!(fleet.receive_shot(r, c).unwrap().outcome, ShotOutcome::Miss);
        }
        prop_assert_eq!(fleet.remaining(), NUM_SHIPS as u8);
        prop_assert_eq!(*fleet.board(), board);
    }

    #[test]
    fn worklist_sink_matches_recursive_sink(seed in any::<u64>(), row in 0..GRID_SIZE, col in 0..GRID_SIZE) {
        let mut board = random_board(seed);
        let mut grid = *board.rows();
        if let Cell::Segment(kind) = grid[row][col] {
            sink_recursive(&mut grid, row as isize, col as isize, kind);
        }
        board.fire_at(row, col).unwrap();
        prop_assert_eq!(board.rows(), &grid);
    }

    #[test]
    fn random_shots_sink_each_ship_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = Fleet::generate(&mut rng).unwrap();
        let mut hits = 0;
        for _ in 0..2_000 {
            if fleet.is_defeated() {
                break;
            }
            if fleet.receive_random_shot(&mut rng).outcome.is_hit() {
                hits += 1;
            }
            prop_assert_eq!(fleet.remaining() as usize, NUM_SHIPS - hits);
            prop_assert_eq!(fleet.board().ships().len(), fleet.remaining() as usize);
        }
    }
}
