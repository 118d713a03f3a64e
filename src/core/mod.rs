//! Core battleship game logic (no_std compatible)
//!
//! Boards, gap-rule ship placement, flood-fill shot resolution and the
//! two-seat turn controller. Nothing in here allocates beyond the ship list
//! returned by [`Board::ships`], and nothing depends on `std`.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, ShipCells};
pub use common::{BoardError, Shot, ShotOutcome};
pub use config::*;
pub use game::{Fleet, MatchState, MatchStatus, Seat, TurnReport};
pub use ship::{Orientation, Placement, ShipKind};
