use super::{Board, Color};

impl Board {
    /// Count leaf nodes of the legal move tree `depth` plies deep.
    ///
    /// Moves are played the way the game plays them, so en passant rights
    /// last exactly one reply.
    pub fn perft(&self, side_to_move: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(side_to_move);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.clone();
                child.play(mv);
                child.perft(side_to_move.opponent(), depth - 1)
            })
            .sum()
    }
}
