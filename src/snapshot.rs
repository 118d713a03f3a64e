#![cfg(feature = "std")]
//! Binary save records: a match state plus the time it was written.
//!
//! A snapshot is only good for [`DEFAULT_MAX_SAVE_AGE`](crate::config::DEFAULT_MAX_SAVE_AGE)
//! by default. Anything wrong with a save file (missing, unreadable, stale,
//! inconsistent) is reported as a [`SnapshotError`] so callers can fall back
//! to a fresh match.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::{
    board::ShipCells,
    common::BoardError,
    config::{fleet_count, FLEET, NUM_SHIPS},
    game::{MatchState, Seat},
};

/// Upper bound on the turn counter of a loadable save. Random play ends long
/// before this; anything above it is a damaged file.
pub const MAX_SAVED_TURNS: u32 = 1_000_000;

/// A saved match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: MatchState,
    /// Seconds since the Unix epoch.
    pub saved_at: u64,
}

#[derive(Debug)]
pub enum SnapshotError {
    Io(io::Error),
    Decode(bincode::Error),
    /// Older than the accepted age.
    Stale { age: Duration },
    /// Decoded fine but describes an impossible match.
    Corrupt(&'static str),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "snapshot I/O error: {}", e),
            SnapshotError::Decode(e) => write!(f, "snapshot decode error: {}", e),
            SnapshotError::Stale { age } => write!(f, "snapshot is stale ({}s old)", age.as_secs()),
            SnapshotError::Corrupt(why) => write!(f, "snapshot is corrupt: {}", why),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        SnapshotError::Io(err)
    }
}

impl From<bincode::Error> for SnapshotError {
    fn from(err: bincode::Error) -> Self {
        SnapshotError::Decode(err)
    }
}

fn unix_secs(at: SystemTime) -> u64 {
    at.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}

impl Snapshot {
    pub fn new(state: MatchState, saved_at: SystemTime) -> Self {
        Self {
            state,
            saved_at: unix_secs(saved_at),
        }
    }

    /// Snapshot of `state` stamped with the current time.
    pub fn capture(state: MatchState) -> Self {
        Self::new(state, SystemTime::now())
    }

    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode and sanity-check a snapshot. Age is not checked here.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = bincode::deserialize(bytes)?;
        validate(&snapshot.state)?;
        Ok(snapshot)
    }

    /// Time elapsed between saving and `now`; timestamps in the future count as zero.
    pub fn age(&self, now: SystemTime) -> Duration {
        Duration::from_secs(unix_secs(now).saturating_sub(self.saved_at))
    }

    pub fn is_fresh(&self, now: SystemTime, max_age: Duration) -> bool {
        self.age(now) <= max_age
    }

    /// The saved state, provided the snapshot is no older than `max_age`.
    pub fn restore(self, now: SystemTime, max_age: Duration) -> Result<MatchState, SnapshotError> {
        let age = self.age(now);
        if age > max_age {
            return Err(SnapshotError::Stale { age });
        }
        Ok(self.state)
    }
}

fn validate(state: &MatchState) -> Result<(), SnapshotError> {
    for seat in [Seat::Parent, Seat::Child] {
        let fleet = state.fleet(seat);
        if fleet.remaining() as usize > NUM_SHIPS {
            return Err(SnapshotError::Corrupt("ship counter above fleet size"));
        }
        let ships = fleet.board().ships();
        if ships.len() != fleet.remaining() as usize {
            return Err(SnapshotError::Corrupt("ship counter disagrees with board"));
        }
        check_layout(&ships)?;
    }
    if state.fleet(Seat::Parent).is_defeated() && state.fleet(Seat::Child).is_defeated() {
        return Err(SnapshotError::Corrupt("both fleets sunk"));
    }
    if state.turns() > MAX_SAVED_TURNS {
        return Err(SnapshotError::Corrupt("implausible turn count"));
    }
    Ok(())
}

/// Live ships must be whole straight ships, no more of a kind than the fleet
/// holds, and keep the one-cell gap. A sink relies on the gap to stop at the
/// struck ship.
fn check_layout(ships: &[ShipCells]) -> Result<(), SnapshotError> {
    if ships.iter().any(|ship| !ship.is_straight()) {
        return Err(SnapshotError::Corrupt("ship is not a straight run of its length"));
    }
    if FLEET
        .iter()
        .any(|&kind| ships.iter().filter(|s| s.kind == kind).count() > fleet_count(kind))
    {
        return Err(SnapshotError::Corrupt("more ships of a kind than the fleet holds"));
    }
    for (i, ship) in ships.iter().enumerate() {
        let zone = ship.mask.halo();
        if ships[i + 1..].iter().any(|other| zone.intersects(&other.mask)) {
            return Err(SnapshotError::Corrupt("ships touch"));
        }
    }
    Ok(())
}

/// Write a snapshot of `state` to `path`, stamped with the current time.
pub fn save(path: &Path, state: &MatchState) -> Result<(), SnapshotError> {
    let bytes = Snapshot::capture(*state).encode()?;
    fs::write(path, bytes)?;
    debug!("saved turn {} to {}", state.turns(), path.display());
    Ok(())
}

/// Read a snapshot from `path` and return its state if it is fresh.
pub fn load(path: &Path, now: SystemTime, max_age: Duration) -> Result<MatchState, SnapshotError> {
    let bytes = fs::read(path)?;
    Snapshot::decode(&bytes)?.restore(now, max_age)
}

/// Resume from `path` when it holds a fresh snapshot, otherwise generate a
/// new match. Returns the state and whether it was restored.
pub fn load_or_generate<R: Rng>(
    path: Option<&Path>,
    max_age: Duration,
    rng: &mut R,
) -> Result<(MatchState, bool), BoardError> {
    if let Some(path) = path {
        match load(path, SystemTime::now(), max_age) {
            Ok(state) => {
                info!("resuming match from {} at turn {}", path.display(), state.turns());
                return Ok((state, true));
            }
            Err(SnapshotError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no snapshot at {}", path.display());
            }
            Err(e) => warn!("ignoring {}: {}", path.display(), e),
        }
    }
    Ok((MatchState::generate(rng)?, false))
}
