use super::super::{Board, Color, Direction, Move, Position};

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Position,
        color: Color,
        directions: &[Direction],
    ) -> Vec<Move> {
        self.slider_targets(from, color, directions)
            .into_iter()
            .map(|to| Move::normal(from, to))
            .collect()
    }

    /// Walk each ray until the first occupied square; keep it only if it is an enemy
    pub(crate) fn slider_targets(
        &self,
        from: Position,
        color: Color,
        directions: &[Direction],
    ) -> Vec<Position> {
        let mut targets = Vec::new();
        for &dir in directions {
            let mut to = from + dir;
            while to.is_inside() {
                if self.is_empty(to) {
                    targets.push(to);
                    to += dir;
                    continue;
                }
                if self.is_enemy(to, color) {
                    targets.push(to);
                }
                break;
            }
        }
        targets
    }
}
