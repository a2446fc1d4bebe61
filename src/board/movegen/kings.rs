use super::super::state::KING_HOME_COLUMN;
use super::super::{Board, CastleSide, Direction, Move, Piece, PieceKind, Position};

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Position, king: Piece) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .step_targets(from, king.color, &Direction::ALL)
            .into_iter()
            .map(|to| Move::normal(from, to))
            .collect();

        if king.has_moved || from != Position::new(king.color.home_row(), KING_HOME_COLUMN) {
            return moves;
        }

        // Check safety is left to the castle legality test
        for side in CastleSide::BOTH {
            let rook_square = Position::new(from.row, side.rook_from_column());
            let path_clear = side
                .between_columns()
                .iter()
                .all(|&column| self.is_empty(Position::new(from.row, column)));
            if path_clear && self.is_unmoved(rook_square, king.color, PieceKind::Rook) {
                moves.push(Move::castle(side, from));
            }
        }

        moves
    }
}
