//! Material counting and insufficient-material detection.

use super::{Board, Color, PieceKind, Position};

/// Piece tally by color and kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialCount {
    counts: [[u32; 6]; 2],
    total: u32,
}

impl MaterialCount {
    pub fn increment(&mut self, color: Color, kind: PieceKind) {
        self.counts[color.index()][kind.index()] += 1;
        self.total += 1;
    }

    #[inline]
    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.counts[color.index()][kind.index()]
    }

    #[inline]
    #[must_use]
    pub fn white(&self, kind: PieceKind) -> u32 {
        self.count(Color::White, kind)
    }

    #[inline]
    #[must_use]
    pub fn black(&self, kind: PieceKind) -> u32 {
        self.count(Color::Black, kind)
    }

    /// Pieces of every kind on the board, kings included
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Pieces other than the kings
    #[must_use]
    pub fn non_king_total(&self) -> u32 {
        self.total - self.white(PieceKind::King) - self.black(PieceKind::King)
    }
}

impl Board {
    pub fn count_pieces(&self) -> MaterialCount {
        let mut counting = MaterialCount::default();
        for pos in self.piece_positions() {
            if let Some(piece) = self.piece_at(pos) {
                counting.increment(piece.color, piece.kind);
            }
        }
        counting
    }

    /// Dead position by material.
    ///
    /// Covers exactly: bare kings, a single minor piece, and one bishop each
    /// standing on squares of the same color. Other drawn material
    /// combinations (e.g. two knights) are not detected.
    pub fn insufficient_material(&self) -> bool {
        let counting = self.count_pieces();
        match counting.non_king_total() {
            0 => true,
            1 => PieceKind::ALL
                .iter()
                .filter(|kind| kind.is_minor())
                .any(|kind| counting.white(*kind) + counting.black(*kind) == 1),
            2 => {
                counting.white(PieceKind::Bishop) == 1
                    && counting.black(PieceKind::Bishop) == 1
                    && self.bishops_on_same_color()
            }
            _ => false,
        }
    }

    fn bishops_on_same_color(&self) -> bool {
        let bishop_square = |color: Color| -> Option<Position> {
            self.pieces_of(color).into_iter().find(|pos| {
                self.piece_at(*pos)
                    .is_some_and(|p| p.kind == PieceKind::Bishop)
            })
        };
        match (bishop_square(Color::White), bishop_square(Color::Black)) {
            (Some(white), Some(black)) => white.is_dark() == black.is_dark(),
            _ => false,
        }
    }
}
