use battleship_duel::{
    Board, Fleet, MatchState, MatchStatus, Seat, ShipKind, ShotOutcome, NUM_SHIPS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn lone_destroyer() -> Fleet {
    let board: Board = "
        D D O O O O O O
        O O O O O O O O
        O O O O O O O O
        O O O O O O O O
        O O O O O O O O
        O O O O O O O O
        O O O O O O O O
        O O O O O O O O
    "
    .parse()
    .unwrap();
    Fleet::new(board, 1)
}

fn open_water(fleet: &Fleet) -> (usize, usize) {
    (!fleet.board().occupied()).iter_set_bits().next().unwrap()
}

#[test]
fn test_new_match_starts_with_parent() {
    let mut rng = SmallRng::seed_from_u64(3);
    let state = MatchState::generate(&mut rng).unwrap();
    assert_eq!(state.status(), MatchStatus::ParentTurn);
    assert_eq!(state.to_move(), Seat::Parent);
    assert_eq!(state.turns(), 0);
    assert_eq!(state.fleet(Seat::Parent).remaining(), NUM_SHIPS as u8);
    assert_eq!(state.fleet(Seat::Child).remaining(), NUM_SHIPS as u8);
    assert_eq!(state.winner(), None);
}

#[test]
fn test_parent_sinking_last_ship_wins() {
    let mut rng = SmallRng::seed_from_u64(4);
    let parent = Fleet::generate(&mut rng).unwrap();
    let mut state = MatchState::from_fleets(parent, lone_destroyer());

    let report = state.play_turn_at(0, 0).unwrap().unwrap();
    assert_eq!(report.shooter, Seat::Parent);
    assert_eq!(
        report.shot.outcome,
        ShotOutcome::Hit {
            kind: ShipKind::Destroyer,
            sunk: 2
        }
    );
    assert_eq!(report.target_remaining, 0);
    assert_eq!(report.status, MatchStatus::Finished(Seat::Parent));
    assert_eq!(state.winner(), Some(Seat::Parent));
    // the child never gets another shot
    assert!(state.play_turn(&mut rng).is_none());
    assert_eq!(state.turns(), 1);
}

#[test]
fn test_child_win_detected_right_after_its_shot() {
    let mut rng = SmallRng::seed_from_u64(5);
    let child = Fleet::generate(&mut rng).unwrap();
    let (r, c) = open_water(&child);
    let mut state = MatchState::from_fleets(lone_destroyer(), child);

    let miss = state.play_turn_at(r, c).unwrap().unwrap();
    assert_eq!(miss.shot.outcome, ShotOutcome::Miss);
    assert_eq!(miss.status, MatchStatus::ChildTurn);

    let report = state.play_turn_at(0, 1).unwrap().unwrap();
    assert_eq!(report.shooter, Seat::Child);
    assert_eq!(report.status, MatchStatus::Finished(Seat::Child));
    assert_eq!(state.status(), MatchStatus::Finished(Seat::Child));
    assert!(state.play_turn(&mut rng).is_none());
    assert_eq!(state.fleet(Seat::Child).remaining(), NUM_SHIPS as u8);
}

#[test]
fn test_turns_alternate() {
    let mut rng = SmallRng::seed_from_u64(6);
    let mut state = MatchState::generate(&mut rng).unwrap();
    let mut expected = Seat::Parent;
    while let Some(report) = state.play_turn(&mut rng) {
        assert_eq!(report.shooter, expected);
        expected = expected.opponent();
    }
    assert!(state.is_finished());
}

#[test]
fn test_play_turn_at_rejects_off_board() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut state = MatchState::generate(&mut rng).unwrap();
    assert!(state.play_turn_at(8, 8).is_err());
    assert_eq!(state.turns(), 0);
    assert_eq!(state.status(), MatchStatus::ParentTurn);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn match_ends_with_exactly_one_survivor(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = MatchState::generate(&mut rng).unwrap();
        loop {
            let parent = state.fleet(Seat::Parent).remaining();
            let child = state.fleet(Seat::Child).remaining();
            prop_assert!(parent > 0 || child > 0, "both fleets sunk");
            match state.status() {
                MatchStatus::Finished(Seat::Parent) => {
                    prop_assert!(child == 0 && parent > 0);
                    break;
                }
                MatchStatus::Finished(Seat::Child) => {
                    prop_assert!(parent == 0 && child > 0);
                    break;
                }
                _ => prop_assert!(parent > 0 && child > 0),
            }
            let report = state.play_turn(&mut rng).unwrap();
            let target = state.fleet(report.shooter.opponent());
            prop_assert_eq!(report.target_remaining, target.remaining());
        }
    }

    #[test]
    fn play_out_agrees_with_status(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = MatchState::generate(&mut rng).unwrap();
        let winner = state.play_out(&mut rng);
        prop_assert_eq!(state.status(), MatchStatus::Finished(winner));
        prop_assert!(state.fleet(winner.opponent()).is_defeated());
        prop_assert!(!state.fleet(winner).is_defeated());
        prop_assert!(state.turns() as usize >= NUM_SHIPS);
    }
}
