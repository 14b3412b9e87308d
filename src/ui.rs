//! Console rendering for boards and per-turn outcomes.
//!
//! The core exposes `CellState` only; every glyph choice lives here.

use std::fmt::Write as _;

use crate::board::{Board, CellState};
use crate::common::ShotOutcome;
use crate::game::Game;

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Occupied => 'S',
        CellState::Hit => 'X',
        CellState::Miss => 'o',
    }
}

/// Render a board as text with 1-based row and column headers. With
/// `hide_ships` set, unsunk ship cells render as open water.
pub fn render_board(board: &Board, hide_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..board.size() {
        let _ = write!(out, " {}", col + 1);
    }
    out.push('\n');
    for row in 0..board.size() {
        let _ = write!(out, "{:2} ", row + 1);
        for col in 0..board.size() {
            let state = board
                .visible_cell(row, col, hide_ships)
                .unwrap_or(CellState::Empty);
            let _ = write!(out, " {}", glyph(state));
        }
        out.push('\n');
    }
    out
}

/// Print the player's own board (revealed) above the computer's (hidden).
pub fn print_player_view(game: &Game) {
    println!("Your board:");
    print!("{}", render_board(game.player_board(), false));
    println!("\nComputer board:");
    print!("{}", render_board(game.computer_board(), true));
}

/// One-line announcement for a shot outcome.
pub fn outcome_message(outcome: ShotOutcome) -> String {
    match outcome {
        ShotOutcome::Hit => "Hit!".to_string(),
        ShotOutcome::Sunk(length) => format!("Hit! A ship of length {} is sunk!", length),
        ShotOutcome::Miss => "Miss!".to_string(),
    }
}
