#![cfg(feature = "std")]

use std::path::PathBuf;
use std::time::Duration;

/// Pause after every turn when none is given on the command line.
pub const DEFAULT_TURN_DELAY: Duration = Duration::from_secs(1);
/// Autosave after every this many completed turns.
pub const DEFAULT_AUTOSAVE_EVERY: u32 = 5;
/// Snapshots older than this are ignored.
pub const DEFAULT_MAX_SAVE_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Runtime settings for a paced match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub turn_delay: Duration,
    /// Zero disables autosave.
    pub autosave_every: u32,
    /// Where snapshots are read from and written to. `None` disables both.
    pub save_path: Option<PathBuf>,
    pub max_save_age: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            turn_delay: DEFAULT_TURN_DELAY,
            autosave_every: DEFAULT_AUTOSAVE_EVERY,
            save_path: None,
            max_save_age: DEFAULT_MAX_SAVE_AGE,
        }
    }
}

impl RunConfig {
    /// No pacing and no persistence; what tests and the simulator want.
    pub fn unpaced() -> Self {
        Self {
            turn_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Whether a snapshot is due after `turns` completed turns.
    pub fn autosave_due(&self, turns: u32) -> bool {
        self.save_path.is_some() && self.autosave_every > 0 && turns > 0 && turns % self.autosave_every == 0
    }
}
