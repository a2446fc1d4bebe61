//! Pseudo-legal move generation.
//!
//! Candidates obey piece geometry and occupancy but ignore whether the
//! mover's own king is left in check; the legality filter lives in
//! `make_move.rs`. King threats are answered by a separate, narrower query so
//! that check detection never generates castling (whose legality itself asks
//! about check).

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Direction, Move, PieceKind, Position};

impl Board {
    /// Pseudo-legal moves for the piece on `from`; empty for an empty square
    pub fn candidate_moves(&self, from: Position) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::Bishop => self.generate_slider_moves(from, piece.color, &Direction::DIAGONAL),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, &Direction::ORTHOGONAL),
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, &Direction::ALL),
            PieceKind::King => self.generate_king_moves(from, piece),
        }
    }

    /// True if the piece on `from` could capture the opposing king
    pub fn threatens_king(&self, from: Position) -> bool {
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        let targets = match piece.kind {
            PieceKind::Pawn => self.pawn_attack_squares(from, piece.color),
            PieceKind::Knight => self.step_targets(from, piece.color, &Direction::KNIGHT_JUMPS),
            PieceKind::Bishop => self.slider_targets(from, piece.color, &Direction::DIAGONAL),
            PieceKind::Rook => self.slider_targets(from, piece.color, &Direction::ORTHOGONAL),
            PieceKind::Queen => self.slider_targets(from, piece.color, &Direction::ALL),
            PieceKind::King => self.step_targets(from, piece.color, &Direction::ALL),
        };
        targets
            .into_iter()
            .any(|to| self.holds_enemy_king(to, piece.color))
    }

    /// Squares one step away in each direction that are empty or hold an enemy
    pub(crate) fn step_targets(
        &self,
        from: Position,
        color: Color,
        steps: &[Direction],
    ) -> Vec<Position> {
        steps
            .iter()
            .map(|dir| from + *dir)
            .filter(|to| to.is_inside() && (self.is_empty(*to) || self.is_enemy(*to, color)))
            .collect()
    }

    fn holds_enemy_king(&self, pos: Position, color: Color) -> bool {
        matches!(
            self.piece_at(pos),
            Some(piece) if piece.kind == PieceKind::King && piece.color != color
        )
    }
}
