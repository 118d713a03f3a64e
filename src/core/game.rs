use core::fmt;

use rand::Rng;

use crate::core::{
    board::Board,
    common::{BoardError, Shot, ShotOutcome},
    config::NUM_SHIPS,
};

/// One of the two sides of a match. The parent always shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    Parent,
    Child,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Parent => Seat::Child,
            Seat::Child => Seat::Parent,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Parent => f.write_str("Parent"),
            Seat::Child => f.write_str("Child"),
        }
    }
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    ParentTurn,
    ChildTurn,
    /// Terminal; carries the winner.
    Finished(Seat),
}

/// A board together with the number of its ships still afloat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    board: Board,
    remaining: u8,
}

impl Fleet {
    /// A freshly generated fleet with every ship afloat.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        Ok(Self::new(Board::generate(rng)?, NUM_SHIPS as u8))
    }

    /// Wrap an existing board. `remaining` should match the number of ships on it.
    pub fn new(board: Board, remaining: u8) -> Self {
        Self { board, remaining }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn is_defeated(&self) -> bool {
        self.remaining == 0
    }

    /// Take a shot at a uniformly random cell. There is no memory of earlier
    /// shots: the same cell can be picked again and is then a miss.
    pub fn receive_random_shot<R: Rng>(&mut self, rng: &mut R) -> Shot {
        let (row, col) = Board::random_target(rng);
        let outcome = self.sink_or_miss(row, col);
        Shot {
            row: row as u8,
            col: col as u8,
            outcome,
        }
    }

    /// Take a shot at an explicit cell.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> Result<Shot, BoardError> {
        self.board.get(row, col)?;
        Ok(Shot {
            row: row as u8,
            col: col as u8,
            outcome: self.sink_or_miss(row, col),
        })
    }

    fn sink_or_miss(&mut self, row: usize, col: usize) -> ShotOutcome {
        let outcome = self.board.fire_at(row, col).unwrap_or(ShotOutcome::Miss);
        if outcome.is_hit() {
            self.remaining = self.remaining.saturating_sub(1);
        }
        outcome
    }
}

/// Record of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Seat,
    pub shot: Shot,
    /// Ships the target still has after the shot.
    pub target_remaining: u8,
    /// Status once the turn is over.
    pub status: MatchStatus,
}

/// Complete state of a match: both fleets, whose turn it is and how many
/// turns have been played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    parent: Fleet,
    child: Fleet,
    parent_turn: bool,
    turns: u32,
}

impl MatchState {
    /// Generate both boards; the parent moves first.
    pub fn generate<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let parent = Fleet::generate(rng)?;
        let child = Fleet::generate(rng)?;
        Ok(Self::from_fleets(parent, child))
    }

    pub fn from_fleets(parent: Fleet, child: Fleet) -> Self {
        Self {
            parent,
            child,
            parent_turn: true,
            turns: 0,
        }
    }

    pub fn fleet(&self, seat: Seat) -> &Fleet {
        match seat {
            Seat::Parent => &self.parent,
            Seat::Child => &self.child,
        }
    }

    fn fleet_mut(&mut self, seat: Seat) -> &mut Fleet {
        match seat {
            Seat::Parent => &mut self.parent,
            Seat::Child => &mut self.child,
        }
    }

    /// Completed turns so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Seat due to shoot next (meaningless once finished).
    pub fn to_move(&self) -> Seat {
        if self.parent_turn {
            Seat::Parent
        } else {
            Seat::Child
        }
    }

    /// Current status, derived from the counters and the turn flag.
    ///
    /// Termination is checked on both fleets regardless of whose turn it is,
    /// so a shot that sinks the parent's last ship finishes the match at once.
    pub fn status(&self) -> MatchStatus {
        match (self.parent.is_defeated(), self.child.is_defeated()) {
            (_, true) => MatchStatus::Finished(Seat::Parent),
            (true, false) => MatchStatus::Finished(Seat::Child),
            (false, false) if self.parent_turn => MatchStatus::ParentTurn,
            (false, false) => MatchStatus::ChildTurn,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status(), MatchStatus::Finished(_))
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.status() {
            MatchStatus::Finished(seat) => Some(seat),
            _ => None,
        }
    }

    /// Resolve one random shot by the seat to move. Returns `None` once the
    /// match is over.
    pub fn play_turn<R: Rng>(&mut self, rng: &mut R) -> Option<TurnReport> {
        let shooter = match self.status() {
            MatchStatus::ParentTurn => Seat::Parent,
            MatchStatus::ChildTurn => Seat::Child,
            MatchStatus::Finished(_) => return None,
        };
        let target = self.fleet_mut(shooter.opponent());
        let shot = target.receive_random_shot(rng);
        let target_remaining = target.remaining();
        Some(self.finish_turn(shooter, shot, target_remaining))
    }

    /// Like [`MatchState::play_turn`], with the target cell chosen by the caller.
    pub fn play_turn_at(&mut self, row: usize, col: usize) -> Result<Option<TurnReport>, BoardError> {
        let shooter = match self.status() {
            MatchStatus::ParentTurn => Seat::Parent,
            MatchStatus::ChildTurn => Seat::Child,
            MatchStatus::Finished(_) => return Ok(None),
        };
        let target = self.fleet_mut(shooter.opponent());
        let shot = target.receive_shot(row, col)?;
        let target_remaining = target.remaining();
        Ok(Some(self.finish_turn(shooter, shot, target_remaining)))
    }

    fn finish_turn(&mut self, shooter: Seat, shot: Shot, target_remaining: u8) -> TurnReport {
        self.turns = self.turns.saturating_add(1);
        // The turn only passes to the child while it still has ships; the
        // child always hands back to the parent.
        self.parent_turn = match shooter {
            Seat::Parent => target_remaining == 0,
            Seat::Child => true,
        };
        TurnReport {
            shooter,
            shot,
            target_remaining,
            status: self.status(),
        }
    }

    /// Play turns until the match is finished, returning the winner.
    pub fn play_out<R: Rng>(&mut self, rng: &mut R) -> Seat {
        loop {
            if let Some(winner) = self.winner() {
                return winner;
            }
            self.play_turn(rng);
        }
    }
}
