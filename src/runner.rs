#![cfg(feature = "std")]
//! Drivers that play a whole match: the single-owner paced loop and the
//! two-task hand-off duel.

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::time::{sleep, Duration};

use crate::{
    config::RunConfig,
    core::{
        board::Board,
        common::BoardError,
        config::NUM_SHIPS,
        game::{Fleet, MatchState, Seat, TurnReport},
    },
    player::{GameStatus, Player, PlayerNode, RandomPlayer},
    snapshot,
    transport::in_memory::InMemoryTransport,
    ui,
};

/// RNG from a fixed seed when given, otherwise from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

/// Plays a match from a single owner of the [`MatchState`]: one shot per
/// turn, a pause after each, and a snapshot every few turns.
pub struct MatchRunner {
    state: MatchState,
    rng: SmallRng,
    config: RunConfig,
    print_boards: bool,
}

impl MatchRunner {
    pub fn new(state: MatchState, rng: SmallRng, config: RunConfig) -> Self {
        Self {
            state,
            rng,
            config,
            print_boards: false,
        }
    }

    /// Resume from the configured save file if it is fresh, else deal a new
    /// match. The flag tells whether a snapshot was used.
    pub fn start(mut rng: SmallRng, config: RunConfig) -> Result<(Self, bool), BoardError> {
        let (state, restored) =
            snapshot::load_or_generate(config.save_path.as_deref(), config.max_save_age, &mut rng)?;
        Ok((Self::new(state, rng, config), restored))
    }

    /// Print the target board after every shot.
    pub fn with_board_output(mut self, enabled: bool) -> Self {
        self.print_boards = enabled;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Play one turn and autosave if one is due. `None` once the match is over.
    pub fn step(&mut self) -> anyhow::Result<Option<TurnReport>> {
        let Some(report) = self.state.play_turn(&mut self.rng) else {
            return Ok(None);
        };
        info!("{}", ui::describe_turn(&report));
        if self.print_boards {
            ui::print_turn(&report, self.state.fleet(report.shooter.opponent()).board());
        }
        if self.config.autosave_due(self.state.turns()) {
            if let Some(path) = self.config.save_path.as_deref() {
                snapshot::save(path, &self.state)
                    .map_err(|e| anyhow::anyhow!("autosave to {} failed: {}", path.display(), e))?;
            }
        }
        Ok(Some(report))
    }

    /// Play until there is a winner.
    pub async fn run(&mut self) -> anyhow::Result<Seat> {
        loop {
            if let Some(winner) = self.state.winner() {
                info!("{} wins after {} turns", winner, self.state.turns());
                return Ok(winner);
            }
            self.step()?;
            if !self.config.turn_delay.is_zero() {
                sleep(self.config.turn_delay).await;
            }
        }
    }
}

/// How a duel ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelSummary {
    pub winner: Seat,
    pub parent_shots: usize,
    pub child_shots: usize,
    pub parent_remaining: u8,
    pub child_remaining: u8,
}

fn deal_fleet(player: &mut dyn Player, rng: &mut SmallRng) -> anyhow::Result<Fleet> {
    let mut board = Board::new();
    player
        .place_fleet(rng, &mut board)
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(Fleet::new(board, NUM_SHIPS as u8))
}

/// Run the two seats as separate tasks that only talk through an in-memory
/// transport. With a seed, the parent uses `seed` and the child `seed + 1`.
pub async fn run_duel(seed: Option<u64>, turn_delay: Duration) -> anyhow::Result<DuelSummary> {
    let mut rng1 = seeded_rng(seed);
    let mut rng2 = seeded_rng(seed.map(|s| s.wrapping_add(1)));

    let mut p1 = RandomPlayer::new();
    let mut p2 = RandomPlayer::new();
    let fleet1 = deal_fleet(&mut p1, &mut rng1)?;
    let fleet2 = deal_fleet(&mut p2, &mut rng2)?;

    let (t1, t2) = InMemoryTransport::pair();

    let parent = tokio::spawn(async move {
        let mut node = PlayerNode::new(Seat::Parent, Box::new(p1), fleet1, Box::new(t1))
            .with_turn_delay(turn_delay);
        node.run(&mut rng1).await?;
        Ok::<PlayerNode, anyhow::Error>(node)
    });
    let child = tokio::spawn(async move {
        let mut node = PlayerNode::new(Seat::Child, Box::new(p2), fleet2, Box::new(t2))
            .with_turn_delay(turn_delay);
        node.run(&mut rng2).await?;
        Ok::<PlayerNode, anyhow::Error>(node)
    });

    let (parent, child) = tokio::try_join!(parent, child)?;
    let (parent, child) = (parent?, child?);

    let winner = match (parent.status(), child.status()) {
        (GameStatus::Won, GameStatus::Lost) => Seat::Parent,
        (GameStatus::Lost, GameStatus::Won) => Seat::Child,
        other => return Err(anyhow::anyhow!("duel ended without a winner: {:?}", other)),
    };
    Ok(DuelSummary {
        winner,
        parent_shots: parent.shots_fired(),
        child_shots: child.shots_fired(),
        parent_remaining: parent.fleet().remaining(),
        child_remaining: child.fleet().remaining(),
    })
}
