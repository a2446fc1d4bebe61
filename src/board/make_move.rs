//! Move execution and legality.
//!
//! Execution mutates the board it is given. Legality is always tested on a
//! clone, so a rejected move leaves the original untouched.

use super::{Board, Color, Move, Piece, PieceKind, Position};

impl Board {
    /// Apply `mv` to this board.
    ///
    /// Returns true if the move was a capture or a pawn move, which resets the
    /// fifty-move counter. The caller is responsible for clearing the mover's
    /// previous pawn-skip square beforehand.
    pub fn execute(&mut self, mv: Move) -> bool {
        match mv {
            Move::Normal { from, to } => self.relocate(from, to),
            Move::DoublePawnPush { from, to } => {
                if let Some(pawn) = self.piece_at(from) {
                    self.set_pawn_skip(pawn.color, mv.skipped_square());
                }
                self.relocate(from, to);
                true
            }
            Move::EnPassant { from, to } => {
                self.relocate(from, to);
                if let Some(victim) = mv.en_passant_victim() {
                    self.set(victim, None);
                }
                true
            }
            Move::Castle { from, .. } => {
                self.relocate(from, mv.to());
                if let Some((rook_from, rook_to)) = mv.castle_rook_squares() {
                    self.relocate(rook_from, rook_to);
                }
                false
            }
            Move::Promotion { from, to, kind } => {
                if let Some(pawn) = self.take(from) {
                    let promoted = Piece::new(kind.promotion_or_queen(), pawn.color).moved();
                    self.set(to, Some(promoted));
                }
                true
            }
        }
    }

    /// Move the piece on `from` to `to`, discarding any occupant of `to`.
    ///
    /// Returns true for a capture or a pawn move.
    fn relocate(&mut self, from: Position, to: Position) -> bool {
        let Some(piece) = self.take(from) else {
            return false;
        };
        let captured = self.piece_at(to).is_some();
        self.set(to, Some(piece.moved()));
        captured || piece.kind == PieceKind::Pawn
    }

    /// True unless playing `mv` leaves the mover's king in check.
    ///
    /// Castling additionally requires the king not to start in check and not
    /// to pass through or land on an attacked square.
    pub fn is_legal(&self, mv: Move) -> bool {
        let Some(mover) = self.piece_at(mv.from()) else {
            return false;
        };
        match mv {
            Move::Castle { from, .. } => self.is_castle_safe(from, mv, mover.color),
            _ => {
                let mut copy = self.clone();
                copy.execute(mv);
                !copy.in_check(mover.color)
            }
        }
    }

    fn is_castle_safe(&self, king_from: Position, mv: Move, color: Color) -> bool {
        if self.in_check(color) {
            return false;
        }
        let Some(dir) = mv.castle_direction() else {
            return false;
        };

        let mut copy = self.clone();
        let mut king = king_from;
        for _ in 0..2 {
            copy.relocate(king, king + dir);
            king += dir;
            if copy.in_check(color) {
                return false;
            }
        }
        true
    }

    /// Candidate moves from `from` that pass the legality filter
    pub fn legal_moves_from(&self, from: Position) -> Vec<Move> {
        self.candidate_moves(from)
            .into_iter()
            .filter(|mv| self.is_legal(*mv))
            .collect()
    }

    /// Every legal move for `color`, in row-major order of origin square
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .into_iter()
            .flat_map(|from| self.legal_moves_from(from))
            .collect()
    }

    /// Play `mv` the way a game does: clear the mover's stale pawn skip first
    pub(crate) fn play(&mut self, mv: Move) -> bool {
        if let Some(piece) = self.piece_at(mv.from()) {
            self.set_pawn_skip(piece.color, None);
        }
        self.execute(mv)
    }
}
