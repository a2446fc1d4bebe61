//! Clone isolation: working on a copy never touches the original board.

use super::sq;
use crate::board::{Board, Color, Move, PieceKind};

fn snapshot(board: &Board) -> Vec<String> {
    board
        .piece_positions()
        .filter_map(|pos| {
            board
                .piece_at(pos)
                .map(|p| format!("{pos}{}{}", p.to_state_char(), p.has_moved))
        })
        .collect()
}

#[test]
fn test_clone_then_move_leaves_original() {
    let original = Board::initial();
    let before = snapshot(&original);

    let mut copy = original.clone();
    copy.play(Move::double_pawn_push(sq("e2"), sq("e4")));

    assert_eq!(snapshot(&original), before);
    assert_eq!(original.pawn_skip(Color::White), None);
    assert_eq!(copy.pawn_skip(Color::White), Some(sq("e3")));
    assert!(copy.piece_at(sq("e4")).is_some_and(|p| p.has_moved));
    assert!(original.piece_at(sq("e2")).is_some_and(|p| !p.has_moved));
}

#[test]
fn test_legality_probe_does_not_mutate() {
    let (board, side) =
        Board::from_state_string("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .expect("valid state");
    let before = board.clone();

    let moves = board.legal_moves(side);
    assert!(!moves.is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_copy_edits_do_not_leak_back() {
    let original = Board::initial();
    let mut copy = original.clone();
    copy.set(sq("d1"), None);
    copy.set_pawn_skip(Color::Black, Some(sq("d6")));

    assert_eq!(
        original.piece_at(sq("d1")).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
    assert_eq!(original.pawn_skip(Color::Black), None);
    assert_ne!(original, copy);
}
