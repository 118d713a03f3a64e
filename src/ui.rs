#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::core::{
    board::Board,
    common::ShotOutcome,
    config::GRID_SIZE,
    game::{MatchState, MatchStatus, Seat, TurnReport},
};

/// Column letter and 1-based row, e.g. `C4`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

/// Framed picture of a board with column letters and row numbers.
pub fn render_board(title: &str, board: &Board) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    {}", title);
    let _ = writeln!(out, "    ╔═══════════════════╗");
    let _ = write!(out, "    ║   ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, "{} ", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, "║");
    let _ = writeln!(out, "    ╠═══════════════════╣");
    for (r, row) in board.rows().iter().enumerate() {
        let _ = write!(out, "    ║ {} ", r + 1);
        for cell in row {
            let _ = write!(out, "{} ", cell.symbol());
        }
        let _ = writeln!(out, "║");
    }
    let _ = write!(out, "    ╚═══════════════════╝");
    out
}

pub fn print_board(title: &str, board: &Board) {
    std::println!("{}", render_board(title, board));
}

/// Both boards, parent first.
pub fn print_match(state: &MatchState) {
    for seat in [Seat::Parent, Seat::Child] {
        let fleet = state.fleet(seat);
        let title = std::format!("{}'s grid ({} ships left)", seat, fleet.remaining());
        print_board(&title, fleet.board());
    }
}

/// One-line summary of a turn.
pub fn describe_turn(report: &TurnReport) -> String {
    let at = coord_to_string(report.shot.row as usize, report.shot.col as usize);
    match report.shot.outcome {
        ShotOutcome::Hit { kind, sunk } => std::format!(
            "{}'s turn: hit at {}! {} ({} cells) sunk, {} ships left",
            report.shooter, at, kind, sunk, report.target_remaining
        ),
        ShotOutcome::Miss => std::format!("{}'s turn: missed at {}", report.shooter, at),
    }
}

pub fn print_turn(report: &TurnReport, target: &Board) {
    std::println!("\n{}", describe_turn(report));
    let title = std::format!("{}'s grid after the shot", report.shooter.opponent());
    print_board(&title, target);
}

pub fn print_result(status: MatchStatus) {
    if let MatchStatus::Finished(winner) = status {
        std::println!("\n{} wins!", winner);
    }
}
