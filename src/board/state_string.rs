//! Canonical state string.
//!
//! Four space-separated fields, in the spirit of the first four FEN fields:
//! piece placement (row 0 first), side to move, castling rights derived from
//! unmoved kings and rooks, and the en passant target when a capture there is
//! actually legal. Two positions that must count as repetitions of each other
//! produce identical strings.

use std::fmt::Write;

use super::error::StateStringError;
use super::state::KING_HOME_COLUMN;
use super::{Board, CastleSide, CastlingRights, Color, Direction, Piece, PieceKind, Position};

impl Board {
    /// Encode the board with `side_to_move` to play
    pub fn state_string(&self, side_to_move: Color) -> String {
        let mut out = String::with_capacity(90);
        self.write_placement(&mut out);

        let side = match side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        // Writing into a String cannot fail
        let _ = write!(out, " {side} {} ", self.castling_rights());

        match self.en_passant_target(side_to_move) {
            Some(target) => {
                let _ = write!(out, "{target}");
            }
            None => out.push('-'),
        }
        out
    }

    fn write_placement(&self, out: &mut String) {
        for row in 0..8 {
            if row != 0 {
                out.push('/');
            }
            let mut empty = 0;
            for column in 0..8 {
                match self.piece_at(Position::new(row, column)) {
                    None => empty += 1,
                    Some(piece) => {
                        if empty > 0 {
                            let _ = write!(out, "{empty}");
                            empty = 0;
                        }
                        out.push(piece.to_state_char());
                    }
                }
            }
            if empty > 0 {
                let _ = write!(out, "{empty}");
            }
        }
    }

    /// Castling rights for both colors, from king and rook moved flags
    pub fn castling_rights(&self) -> CastlingRights {
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castle_rights(color, side) {
                    rights.set(color, side);
                }
            }
        }
        rights
    }

    /// Square behind the opponent's just-pushed pawn, if `side_to_move` can take it
    pub fn en_passant_target(&self, side_to_move: Color) -> Option<Position> {
        if self.can_capture_en_passant(side_to_move) {
            self.pawn_skip(side_to_move.opponent())
        } else {
            None
        }
    }

    /// Parse a state string back into a board and the side to move.
    ///
    /// Moved flags are inferred: kings and rooks count as unmoved only when a
    /// matching castling right is listed, pawns only on their starting row.
    /// The en passant square becomes the pawn skip of the side that just moved.
    pub fn from_state_string(state: &str) -> Result<(Board, Color), StateStringError> {
        let parts: Vec<&str> = state.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(StateStringError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(StateStringError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, CastleSide::Kingside),
                'Q' => rights.set(Color::White, CastleSide::Queenside),
                'k' => rights.set(Color::Black, CastleSide::Kingside),
                'q' => rights.set(Color::Black, CastleSide::Queenside),
                '-' => {}
                _ => return Err(StateStringError::InvalidCastling { char: c }),
            }
        }
        infer_moved_flags(&mut board, rights);

        if parts[3] != "-" {
            let target: Position =
                parts[3]
                    .parse()
                    .map_err(|_| StateStringError::InvalidEnPassant {
                        found: parts[3].to_string(),
                    })?;
            let mover = side_to_move.opponent();
            let forward = match mover {
                Color::White => Direction::NORTH,
                Color::Black => Direction::SOUTH,
            };
            let expected_row = mover.pawn_start_row() + forward.row_delta;
            if target.row != expected_row {
                return Err(StateStringError::EnPassantWrongRank {
                    square: target,
                    expected_rank: Position::new(expected_row, 0).rank(),
                });
            }
            board.set_pawn_skip(mover, Some(target));
        }

        Ok((board, side_to_move))
    }
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), StateStringError> {
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(StateStringError::RowCount { found: rows.len() });
    }
    for (row, row_str) in rows.iter().enumerate() {
        let mut column = 0usize;
        for c in row_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = PieceKind::from_char(c).ok_or(StateStringError::InvalidPiece { char: c })?;
            if column >= 8 {
                return Err(StateStringError::RowWidth {
                    row,
                    columns: column + 1,
                });
            }
            board.set(
                Position::new(row as i8, column as i8),
                Some(Piece::new(kind, color)),
            );
            column += 1;
        }
        if column != 8 {
            return Err(StateStringError::RowWidth { row, columns: column });
        }
    }
    Ok(())
}

fn infer_moved_flags(board: &mut Board, rights: CastlingRights) {
    let occupied: Vec<Position> = board.piece_positions().collect();
    for pos in occupied {
        let Some(piece) = board.piece_at(pos) else {
            continue;
        };
        let home = piece.color.home_row();
        let unmoved = match piece.kind {
            PieceKind::Pawn => pos.row == piece.color.pawn_start_row(),
            PieceKind::King => {
                pos == Position::new(home, KING_HOME_COLUMN)
                    && CastleSide::BOTH
                        .iter()
                        .any(|side| rights.has(piece.color, *side))
            }
            PieceKind::Rook => CastleSide::BOTH.iter().any(|side| {
                rights.has(piece.color, *side)
                    && pos == Position::new(home, side.rook_from_column())
            }),
            _ => false,
        };
        if !unmoved {
            board.set(pos, Some(piece.moved()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

    fn sq(s: &str) -> Position {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_initial_state_string() {
        assert_eq!(Board::initial().state_string(Color::White), START);
    }

    #[test]
    fn test_black_to_move_field() {
        let state = Board::initial().state_string(Color::Black);
        assert!(state.contains(" b KQkq "));
    }

    #[test]
    fn test_double_push_without_capturer_has_no_target() {
        let mut board = Board::initial();
        board.play(Move::double_pawn_push(sq("e2"), sq("e4")));
        assert_eq!(
            board.state_string(Color::Black),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -"
        );
    }

    #[test]
    fn test_en_passant_target_when_capture_available() {
        let (mut board, _) =
            Board::from_state_string("rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq -")
                .expect("valid state");
        board.play(Move::double_pawn_push(sq("d7"), sq("d5")));
        assert_eq!(
            board.state_string(Color::White),
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6"
        );
    }

    #[test]
    fn test_castling_field_tracks_moved_pieces() {
        let mut board = Board::initial();
        let a8 = sq("a8");
        board.set(a8, board.piece_at(a8).map(Piece::moved));
        let e1 = sq("e1");
        board.set(e1, board.piece_at(e1).map(Piece::moved));
        assert!(board.state_string(Color::White).ends_with(" w k -"));
    }

    #[test]
    fn test_parse_round_trip() {
        let state = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
        let (board, side) = Board::from_state_string(state).expect("valid state");
        assert_eq!(side, Color::White);
        assert_eq!(board.state_string(side), state);
    }

    #[test]
    fn test_parse_infers_moved_flags() {
        let (board, _) =
            Board::from_state_string("4k3/8/8/8/4P3/8/P7/R3K2R w Q -").expect("valid state");
        assert!(board.piece_at(sq("e4")).is_some_and(|p| p.has_moved));
        assert!(board.piece_at(sq("a2")).is_some_and(|p| !p.has_moved));
        assert!(board.piece_at(sq("a1")).is_some_and(|p| !p.has_moved));
        assert!(board.piece_at(sq("h1")).is_some_and(|p| p.has_moved));
        assert!(board.piece_at(sq("e1")).is_some_and(|p| !p.has_moved));
        assert!(board.piece_at(sq("e8")).is_some_and(|p| p.has_moved));
    }

    #[test]
    fn test_parse_en_passant_sets_skip() {
        let (board, side) =
            Board::from_state_string("4k3/8/8/3pP3/8/8/8/4K3 w - d6").expect("valid state");
        assert_eq!(side, Color::White);
        assert_eq!(board.pawn_skip(Color::Black), Some(sq("d6")));
        assert!(board.can_capture_en_passant(Color::White));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Board::from_state_string("8/8 w"),
            Err(StateStringError::TooFewParts { found: 2 })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/7x w - -"),
            Err(StateStringError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/8 x - -"),
            Err(StateStringError::InvalidSideToMove {
                found: "x".to_string()
            })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/8 w X -"),
            Err(StateStringError::InvalidCastling { char: 'X' })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/8 w - e9"),
            Err(StateStringError::InvalidEnPassant {
                found: "e9".to_string()
            })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/8 w - e4"),
            Err(StateStringError::EnPassantWrongRank {
                square: sq("e4"),
                expected_rank: 6,
            })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/8/8 w - -"),
            Err(StateStringError::RowCount { found: 9 })
        );
        assert!(matches!(
            Board::from_state_string("8/8/8/8/8/8/8/8p w - -"),
            Err(StateStringError::RowWidth { row: 7, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_placement() {
        assert_eq!(
            Board::from_state_string("8/8 w - -"),
            Err(StateStringError::RowCount { found: 2 })
        );
        assert_eq!(
            Board::from_state_string("8/8/8/8/8/8/8/7 w - -"),
            Err(StateStringError::RowWidth { row: 7, columns: 7 })
        );
        assert_eq!(
            Board::from_state_string("4k3/8/8/8/8/8/8/4K w - -"),
            Err(StateStringError::RowWidth { row: 7, columns: 5 })
        );
    }
}
