use super::super::{Board, Color, Direction, Move, Piece, Position, PROMOTION_KINDS};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Position, pawn: Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let forward = pawn_forward(pawn.color);

        let one = from + forward;
        if one.is_inside() && self.is_empty(one) {
            push_pawn_move(&mut moves, from, one, pawn.color);

            let two = one + forward;
            if !pawn.has_moved && two.is_inside() && self.is_empty(two) {
                moves.push(Move::double_pawn_push(from, two));
            }
        }

        let en_passant_target = self.pawn_skip(pawn.color.opponent());
        for to in diagonal_squares(from, pawn.color) {
            if self.is_enemy(to, pawn.color) {
                push_pawn_move(&mut moves, from, to, pawn.color);
            } else if en_passant_target == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }

        moves
    }

    /// Diagonal squares a pawn could capture on, en passant excluded
    pub(crate) fn pawn_attack_squares(&self, from: Position, color: Color) -> Vec<Position> {
        diagonal_squares(from, color)
            .filter(|to| self.is_enemy(*to, color))
            .collect()
    }
}

fn pawn_forward(color: Color) -> Direction {
    match color {
        Color::White => Direction::NORTH,
        Color::Black => Direction::SOUTH,
    }
}

fn diagonal_squares(from: Position, color: Color) -> impl Iterator<Item = Position> {
    let forward = pawn_forward(color);
    [forward + Direction::EAST, forward + Direction::WEST]
        .into_iter()
        .map(move |dir| from + dir)
        .filter(|to| to.is_inside())
}

/// Normal move, or the four promotions when `to` is on the last rank
fn push_pawn_move(moves: &mut Vec<Move>, from: Position, to: Position, color: Color) {
    if to.row == color.promotion_row() {
        moves.extend(
            PROMOTION_KINDS
                .iter()
                .map(|kind| Move::promotion(from, to, *kind)),
        );
    } else {
        moves.push(Move::normal(from, to));
    }
}
