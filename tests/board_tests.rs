use battleship_duel::{
    Board, BoardError, Cell, Fleet, Orientation, Placement, ShipKind, ShotOutcome, GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const LONE_DESTROYER: &str = "
    D D O O O O O O
    O O O O O O O O
    O O O O O O O O
    O O O O O O O O
    O O O O O O O O
    O O O O O O O O
    O O O O O O O O
    O O O O O O O O
";

#[test]
fn test_gap_rule_rejections() {
    let mut board = Board::new();
    board
        .place(Placement::new(ShipKind::Battleship, 0, 0, Orientation::Horizontal))
        .unwrap();

    // edge contact
    assert_eq!(
        board
            .place(Placement::new(ShipKind::Cruiser, 0, 4, Orientation::Horizontal))
            .unwrap_err(),
        BoardError::TooClose
    );
    // corner contact
    assert_eq!(
        board
            .place(Placement::new(ShipKind::Cruiser, 1, 4, Orientation::Horizontal))
            .unwrap_err(),
        BoardError::TooClose
    );
    assert_eq!(
        board
            .place(Placement::new(ShipKind::Cruiser, 0, 2, Orientation::Vertical))
            .unwrap_err(),
        BoardError::Overlaps
    );
    assert_eq!(
        board
            .place(Placement::new(ShipKind::Cruiser, 6, 0, Orientation::Vertical))
            .unwrap_err(),
        BoardError::OutOfBounds
    );

    // one clear row between the ships is enough
    board
        .place(Placement::new(ShipKind::Cruiser, 2, 0, Orientation::Horizontal))
        .unwrap();
    board
        .place(Placement::new(ShipKind::Destroyer, 0, 5, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.live_segments().count_ones(), 4 + 3 + 2);
    assert_eq!(board.ships().len(), 3);
}

#[test]
fn test_rejected_placement_leaves_board_untouched() {
    let mut board = Board::new();
    board
        .place(Placement::new(ShipKind::Destroyer, 3, 3, Orientation::Vertical))
        .unwrap();
    let before = board;
    let _ = board.place(Placement::new(ShipKind::Cruiser, 2, 2, Orientation::Horizontal));
    assert_eq!(board, before);
}

#[test]
fn test_lone_destroyer_sinks_in_one_shot() {
    let board: Board = LONE_DESTROYER.parse().unwrap();
    let mut fleet = Fleet::new(board, 1);

    let shot = fleet.receive_shot(0, 0).unwrap();
    assert_eq!(
        shot.outcome,
        ShotOutcome::Hit {
            kind: ShipKind::Destroyer,
            sunk: 2
        }
    );
    assert_eq!(fleet.remaining(), 0);
    assert!(fleet.is_defeated());
    assert_eq!(fleet.board().get(0, 0).unwrap(), Cell::Sunk);
    assert_eq!(fleet.board().get(0, 1).unwrap(), Cell::Sunk);
    assert_eq!(fleet.board().sunk_cells().count_ones(), 2);
}

#[test]
fn test_wreckage_and_water_are_misses() {
    let board: Board = LONE_DESTROYER.parse().unwrap();
    let mut fleet = Fleet::new(board, 1);
    fleet.receive_shot(0, 1).unwrap();
    let after_sink = *fleet.board();

    for (r, c) in [(0, 0), (0, 1), (5, 5), (0, 2)] {
        let shot = fleet.receive_shot(r, c).unwrap();
        assert_eq!(shot.outcome, ShotOutcome::Miss);
        assert_eq!(fleet.remaining(), 0);
        assert_eq!(*fleet.board(), after_sink);
    }
}

#[test]
fn test_same_kind_ships_sink_separately() {
    let board: Board = "
        C C C O O O O O
        O O O O O O O O
        C C C O O O O O
        O O O O O O O O
        O O O O O D O O
        O O O O O D O O
        O O O O O O O O
        D D O O O O O O
    "
    .parse()
    .unwrap();
    let mut fleet = Fleet::new(board, 4);

    let shot = fleet.receive_shot(2, 1).unwrap();
    assert_eq!(
        shot.outcome,
        ShotOutcome::Hit {
            kind: ShipKind::Cruiser,
            sunk: 3
        }
    );
    assert_eq!(fleet.remaining(), 3);
    // the other cruiser is still afloat
    assert_eq!(fleet.board().get(0, 0).unwrap(), Cell::Segment(ShipKind::Cruiser));
    assert_eq!(fleet.board().ships().len(), 3);
}

#[test]
fn test_fire_out_of_range() {
    let mut board = Board::new();
    assert!(matches!(
        board.fire_at(GRID_SIZE, 0),
        Err(BoardError::BitBoardError(_))
    ));
    let mut fleet = Fleet::new(board, 0);
    assert!(fleet.receive_shot(0, 8).is_err());
}

#[test]
fn test_display_parse_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(9);
    let board = Board::generate(&mut rng).unwrap();
    let text = board.to_string();
    assert_eq!(text.lines().count(), GRID_SIZE);
    assert!(text.lines().all(|l| l.split(' ').count() == GRID_SIZE));
    let parsed: Board = text.parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_parse_rejects_bad_layouts() {
    assert_eq!("".parse::<Board>().unwrap_err(), BoardError::InvalidLayout);
    let short_row = LONE_DESTROYER.replacen("D D O O O O O O", "D D O O O O O", 1);
    assert_eq!(short_row.parse::<Board>().unwrap_err(), BoardError::InvalidLayout);
    let bad_glyph = LONE_DESTROYER.replacen("D D", "Q D", 1);
    assert_eq!(bad_glyph.parse::<Board>().unwrap_err(), BoardError::InvalidLayout);
    let extra_row = format!("{}\nO O O O O O O O", LONE_DESTROYER);
    assert_eq!(extra_row.parse::<Board>().unwrap_err(), BoardError::InvalidLayout);
}

#[test]
fn test_random_placement_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    assert_eq!(
        Board::generate(&mut rng1).unwrap(),
        Board::generate(&mut rng2).unwrap()
    );
}

#[test]
fn test_placement_exhausted_on_crowded_board() {
    // every cell is within reach of a ship, so nothing else fits
    let board: Board = "
        B B B B O D D O
        O O O O O O O O
        C C C O C C C O
        O O O O O O O O
        D D O D D O D D
        O O O O O O O O
        C C C O C C C O
        O O O O O O O O
    "
    .parse()
    .unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_placement(&mut rng, ShipKind::Destroyer).unwrap_err(),
        BoardError::PlacementExhausted {
            kind: ShipKind::Destroyer,
            attempts: battleship_duel::MAX_PLACEMENT_ATTEMPTS
        }
    );
}
