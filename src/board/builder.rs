//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than replaying moves.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position::new(7, 4), Color::White, PieceKind::King)
//!     .piece(Position::new(0, 4), Color::Black, PieceKind::King)
//!     .piece(Position::new(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.pieces_of(Color::White).len(), 2);
//! ```

use super::{Board, Color, Piece, PieceKind, Position};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
    pawn_skips: [Option<Position>; 2],
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            pawn_skips: [None; 2],
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::initial();
        let mut builder = Self::new();
        for pos in board.piece_positions() {
            if let Some(piece) = board.piece_at(pos) {
                builder.pieces.push((pos, piece));
            }
        }
        builder
    }

    /// Place an unmoved piece on the board.
    ///
    /// A pawn placed off its starting row is flagged as moved, since it can no
    /// longer make a double push.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, kind: PieceKind) -> Self {
        let mut piece = Piece::new(kind, color);
        if kind == PieceKind::Pawn && pos.row != color.pawn_start_row() {
            piece = piece.moved();
        }
        self.pieces.retain(|(sq, _)| *sq != pos);
        self.pieces.push((pos, piece));
        self
    }

    /// Flag the piece on a square as having moved.
    #[must_use]
    pub fn moved(mut self, pos: Position) -> Self {
        for (sq, piece) in &mut self.pieces {
            if *sq == pos {
                *piece = piece.moved();
            }
        }
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(sq, _)| *sq != pos);
        self
    }

    /// Record the square `color`'s pawn skipped on its latest double push.
    #[must_use]
    pub fn pawn_skip(mut self, color: Color, skipped: Position) -> Self {
        self.pawn_skips[color.index()] = Some(skipped);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (pos, piece) in self.pieces {
            if pos.is_inside() {
                board.set(pos, Some(piece));
            }
        }
        board.pawn_skips = self.pawn_skips;
        board
    }
}
