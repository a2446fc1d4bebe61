//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::direction::Direction;
use super::piece::PieceKind;
use super::position::Position;

/// A move, as produced by move generation and consumed by the game.
///
/// Variant-specific squares (the skipped square of a double push, the pawn
/// taken en passant, the rook's path when castling) are derived from the
/// origin and destination rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Plain relocation, capturing whatever stands on `to`
    Normal { from: Position, to: Position },
    /// Two-square pawn advance from the starting rank
    DoublePawnPush { from: Position, to: Position },
    /// Pawn capture onto the square an enemy pawn just skipped
    EnPassant { from: Position, to: Position },
    /// King and rook swap sides; `from` is the king's square
    Castle { side: CastleSide, from: Position },
    /// Pawn reaching the last rank
    Promotion {
        from: Position,
        to: Position,
        kind: PieceKind,
    },
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn normal(from: Position, to: Position) -> Self {
        Move::Normal { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Position, to: Position) -> Self {
        Move::DoublePawnPush { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Position, to: Position) -> Self {
        Move::EnPassant { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn castle(side: CastleSide, king_from: Position) -> Self {
        Move::Castle {
            side,
            from: king_from,
        }
    }

    /// Create a promotion; kinds other than knight, bishop or rook become a queen
    #[inline]
    #[must_use]
    pub const fn promotion(from: Position, to: Position, kind: PieceKind) -> Self {
        Move::Promotion {
            from,
            to,
            kind: kind.promotion_or_queen(),
        }
    }

    /// Get the source square (the king's square for castling)
    #[inline]
    #[must_use]
    pub const fn from(self) -> Position {
        match self {
            Move::Normal { from, .. }
            | Move::DoublePawnPush { from, .. }
            | Move::EnPassant { from, .. }
            | Move::Castle { from, .. }
            | Move::Promotion { from, .. } => from,
        }
    }

    /// Get the destination square (the king's landing square for castling)
    #[inline]
    #[must_use]
    pub const fn to(self) -> Position {
        match self {
            Move::Normal { to, .. }
            | Move::DoublePawnPush { to, .. }
            | Move::EnPassant { to, .. }
            | Move::Promotion { to, .. } => to,
            Move::Castle { side, from } => Position::new(from.row, side.king_to_column()),
        }
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            Move::Promotion { kind, .. } => Some(kind.promotion_or_queen()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self, Move::EnPassant { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self, Move::DoublePawnPush { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self, Move::Promotion { .. })
    }

    /// Square a double-pushed pawn passed over
    #[must_use]
    pub const fn skipped_square(self) -> Option<Position> {
        match self {
            Move::DoublePawnPush { from, to } => {
                Some(Position::new((from.row + to.row) / 2, from.column))
            }
            _ => None,
        }
    }

    /// Square of the pawn removed by an en passant capture
    #[must_use]
    pub const fn en_passant_victim(self) -> Option<Position> {
        match self {
            Move::EnPassant { from, to } => Some(Position::new(from.row, to.column)),
            _ => None,
        }
    }

    /// Rook origin and destination for castling
    #[must_use]
    pub const fn castle_rook_squares(self) -> Option<(Position, Position)> {
        match self {
            Move::Castle { side, from } => Some((
                Position::new(from.row, side.rook_from_column()),
                Position::new(from.row, side.rook_to_column()),
            )),
            _ => None,
        }
    }

    /// Direction the king travels when castling
    #[must_use]
    pub const fn castle_direction(self) -> Option<Direction> {
        match self {
            Move::Castle { side, .. } => Some(side.king_direction()),
            _ => None,
        }
    }
}

/// Coordinate form: `e2e4`, `e7e8q`, castling as the king's move (`e1g1`)
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_castle_squares() {
        let e1 = Position::new(7, 4);
        let ks = Move::castle(CastleSide::Kingside, e1);
        assert_eq!(ks.to(), Position::new(7, 6));
        assert_eq!(
            ks.castle_rook_squares(),
            Some((Position::new(7, 7), Position::new(7, 5)))
        );
        let qs = Move::castle(CastleSide::Queenside, e1);
        assert_eq!(qs.to(), Position::new(7, 2));
        assert_eq!(
            qs.castle_rook_squares(),
            Some((Position::new(7, 0), Position::new(7, 3)))
        );
        assert_eq!(qs.to_string(), "e1c1");
    }

    #[test]
    fn test_derived_squares() {
        let push = Move::double_pawn_push(Position::new(6, 4), Position::new(4, 4));
        assert_eq!(push.skipped_square(), Some(Position::new(5, 4)));

        let ep = Move::en_passant(Position::new(3, 4), Position::new(2, 3));
        assert_eq!(ep.en_passant_victim(), Some(Position::new(3, 3)));
        assert_eq!(ep.skipped_square(), None);
    }

    #[test]
    fn test_promotion_normalised() {
        let mv = Move::promotion(Position::new(1, 0), Position::new(0, 0), PieceKind::King);
        assert_eq!(mv.promotion_kind(), Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "a7a8q");

        let raw = Move::Promotion {
            from: Position::new(1, 0),
            to: Position::new(0, 0),
            kind: PieceKind::Pawn,
        };
        assert_eq!(raw.promotion_kind(), Some(PieceKind::Queen));
    }
}
