use super::{CastleSide, Color, Direction, Move, Piece, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings on their home squares
pub(crate) const KING_HOME_COLUMN: i8 = 4;

/// 8x8 mailbox board.
///
/// Owns every piece by value, so `clone()` is a full deep copy: the clone's
/// grid, moved flags and pawn-skip squares are independent of the original.
/// Legality checks rely on this to simulate moves without touching the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    /// Square each side's pawn passed over on that side's latest double push
    pub(crate) pawn_skips: [Option<Position>; 2],
}

impl Board {
    /// Standard starting position
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (column, kind) in BACK_RANK.iter().enumerate() {
            let column = column as i8;
            board.set(Position::new(0, column), Some(Piece::new(*kind, Color::Black)));
            board.set(Position::new(7, column), Some(Piece::new(*kind, Color::White)));
            board.set(
                Position::new(1, column),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set(
                Position::new(6, column),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
        }
        board
    }

    /// Board with no pieces
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            pawn_skips: [None; 2],
        }
    }

    /// Bounds check, independent of board contents
    #[inline]
    pub fn is_inside(pos: Position) -> bool {
        pos.is_inside()
    }

    /// Piece on a square; `None` for empty or off-board squares
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_inside() {
            return None;
        }
        self.squares[pos.row as usize][pos.column as usize]
    }

    /// Place a piece on (or clear) a square.
    ///
    /// Off-board squares are ignored, like [`Board::piece_at`] reads them as empty.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_inside() {
            self.squares[pos.row as usize][pos.column as usize] = piece;
        }
    }

    /// Remove and return the piece on a square
    #[inline]
    pub(crate) fn take(&mut self, pos: Position) -> Option<Piece> {
        if !pos.is_inside() {
            return None;
        }
        self.squares[pos.row as usize][pos.column as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// True if the square holds a piece of the opposite color
    #[inline]
    pub(crate) fn is_enemy(&self, pos: Position, color: Color) -> bool {
        matches!(self.piece_at(pos), Some(piece) if piece.color != color)
    }

    /// Occupied squares, scanned row-major (row 0 to 7, column 0 to 7)
    pub fn piece_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |pos| !self.is_empty(*pos))
    }

    /// Squares holding `color`'s pieces, in row-major order
    pub fn pieces_of(&self, color: Color) -> Vec<Position> {
        self.piece_positions()
            .filter(|pos| self.piece_at(*pos).is_some_and(|p| p.color == color))
            .collect()
    }

    /// Square the pawn of `color` skipped on its latest double push
    #[inline]
    pub fn pawn_skip(&self, color: Color) -> Option<Position> {
        self.pawn_skips[color.index()]
    }

    #[inline]
    pub fn set_pawn_skip(&mut self, color: Color, pos: Option<Position>) {
        self.pawn_skips[color.index()] = pos;
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.piece_positions().find(|pos| {
            self.piece_at(*pos)
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
        })
    }

    /// True iff any opposing piece could capture `color`'s king
    pub fn in_check(&self, color: Color) -> bool {
        self.pieces_of(color.opponent())
            .into_iter()
            .any(|pos| self.threatens_king(pos))
    }

    /// King and rook on their home squares, neither ever moved.
    ///
    /// Says nothing about the squares between them or about check.
    pub fn castle_rights(&self, color: Color, side: CastleSide) -> bool {
        let row = color.home_row();
        self.is_unmoved(Position::new(row, KING_HOME_COLUMN), color, PieceKind::King)
            && self.is_unmoved(
                Position::new(row, side.rook_from_column()),
                color,
                PieceKind::Rook,
            )
    }

    pub fn castle_rights_kingside(&self, color: Color) -> bool {
        self.castle_rights(color, CastleSide::Kingside)
    }

    pub fn castle_rights_queenside(&self, color: Color) -> bool {
        self.castle_rights(color, CastleSide::Queenside)
    }

    pub(crate) fn is_unmoved(&self, pos: Position, color: Color, kind: PieceKind) -> bool {
        matches!(
            self.piece_at(pos),
            Some(piece) if piece.kind == kind && piece.color == color && !piece.has_moved
        )
    }

    /// True iff `color` can legally capture en passant right now.
    ///
    /// Requires the opponent's latest move to have been a double push and a
    /// friendly pawn beside the pushed pawn whose capture passes the legality
    /// filter.
    pub fn can_capture_en_passant(&self, color: Color) -> bool {
        self.en_passant_captures(color)
            .into_iter()
            .any(|mv| self.is_legal(mv))
    }

    /// Pseudo-legal en passant captures available to `color`
    pub(crate) fn en_passant_captures(&self, color: Color) -> Vec<Move> {
        let Some(skip) = self.pawn_skip(color.opponent()) else {
            return Vec::new();
        };
        let back = match color {
            Color::White => Direction::SOUTH,
            Color::Black => Direction::NORTH,
        };
        [back + Direction::EAST, back + Direction::WEST]
            .into_iter()
            .map(|dir| skip + dir)
            .filter(|from| self.is_pawn_of(*from, color))
            .map(|from| Move::en_passant(from, skip))
            .collect()
    }

    fn is_pawn_of(&self, pos: Position, color: Color) -> bool {
        matches!(
            self.piece_at(pos),
            Some(piece) if piece.kind == PieceKind::Pawn && piece.color == color
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(
            board.piece_at(Position::new(7, 4)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Position::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(board.pieces_of(Color::White).len(), 16);
        assert_eq!(board.pieces_of(Color::Black).len(), 16);
        assert!(board.is_empty(Position::new(4, 4)));
    }

    #[test]
    fn test_pieces_of_row_major() {
        let board = Board::initial();
        let black = board.pieces_of(Color::Black);
        assert_eq!(black[0], Position::new(0, 0));
        assert_eq!(black[8], Position::new(1, 0));
        let white = board.pieces_of(Color::White);
        assert_eq!(white[0], Position::new(6, 0));
        assert_eq!(white[15], Position::new(7, 7));
    }

    #[test]
    fn test_initial_castle_rights() {
        let board = Board::initial();
        for color in Color::BOTH {
            assert!(board.castle_rights_kingside(color));
            assert!(board.castle_rights_queenside(color));
        }
    }

    #[test]
    fn test_moved_rook_loses_right() {
        let mut board = Board::initial();
        let h1 = Position::new(7, 7);
        board.set(h1, board.piece_at(h1).map(Piece::moved));
        assert!(!board.castle_rights_kingside(Color::White));
        assert!(board.castle_rights_queenside(Color::White));
    }

    #[test]
    fn test_off_board_reads_empty() {
        let board = Board::initial();
        assert_eq!(board.piece_at(Position::new(-1, 0)), None);
        assert_eq!(board.piece_at(Position::new(0, 8)), None);
        assert!(!Board::is_inside(Position::new(8, 8)));
    }

    #[test]
    fn test_off_board_set_is_ignored() {
        let mut board = Board::empty();
        board.set(
            Position::new(-1, 3),
            Some(Piece::new(PieceKind::Queen, Color::White)),
        );
        board.set(Position::new(8, 8), None);
        assert_eq!(board, Board::empty());
        assert_eq!(board.piece_positions().count(), 0);
    }

    #[test]
    fn test_king_position() {
        let board = Board::initial();
        assert_eq!(board.king_position(Color::White), Some(Position::new(7, 4)));
        assert_eq!(board.king_position(Color::Black), Some(Position::new(0, 4)));
        assert_eq!(Board::empty().king_position(Color::White), None);
    }

    #[test]
    fn test_initial_not_in_check() {
        let board = Board::initial();
        assert!(!board.in_check(Color::White));
        assert!(!board.in_check(Color::Black));
    }
}
