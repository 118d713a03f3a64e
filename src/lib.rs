#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod player;
#[cfg(feature = "std")]
pub mod config;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod runner;
#[cfg(feature = "std")]
pub mod snapshot;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;
pub mod prelude;

pub use crate::core::*;
pub use player::*;
#[cfg(feature = "std")]
pub use config::RunConfig;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use protocol::Message;
#[cfg(feature = "std")]
pub use runner::{run_duel, seeded_rng, DuelSummary, MatchRunner};
#[cfg(feature = "std")]
pub use snapshot::{Snapshot, SnapshotError};
