//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move generation counts against known perft results
//! - `draw.rs` - Game termination (mate, stalemate, fifty-move, repetition, material)
//! - `copy.rs` - Board clones stay independent of the original
//! - `edge_cases.rs` - Castling, en passant, promotion and pin positions
//! - `proptest.rs` - Property-based tests

mod copy;
mod proptest;

use crate::board::{Move, Position};
use crate::game::GameState;

pub(super) fn sq(s: &str) -> Position {
    s.parse().expect("valid square")
}

/// Play a move given in coordinate form (`e2e4`, `e7e8n`), panicking if it is not legal.
pub(super) fn apply_coord(game: &mut GameState, coord: &str) -> Move {
    let from = sq(&coord[0..2]);
    let to = sq(&coord[2..4]);
    let promotion = coord
        .chars()
        .nth(4)
        .and_then(crate::board::PieceKind::from_char);
    let mv = game
        .find_legal_move(from, to, promotion)
        .unwrap_or_else(|| panic!("move {coord} not legal"));
    game.make_move(mv).expect("move accepted");
    mv
}
