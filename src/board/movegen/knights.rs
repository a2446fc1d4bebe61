use super::super::{Board, Color, Direction, Move, Position};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Position, color: Color) -> Vec<Move> {
        self.step_targets(from, color, &Direction::KNIGHT_JUMPS)
            .into_iter()
            .map(|to| Move::normal(from, to))
            .collect()
    }
}
