//! Square coordinates.

use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::board::error::SquareError;

/// A square on the board as (row, column).
///
/// Row 0 is rank 8 (Black's back rank), row 7 is rank 1; column 0 is file a.
/// Adding a direction may leave the board; check with [`Position::is_inside`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, column: i8) -> Self {
        Position { row, column }
    }

    /// Bounds check against the 8x8 grid
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.row >= 0 && self.row < 8 && self.column >= 0 && self.column < 8
    }

    /// Square color: true for dark squares (a1, c1, ...)
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        (self.row + self.column) % 2 == 1
    }

    /// Rank number 1-8 as written in algebraic notation
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        8i8.saturating_sub(self.row)
    }

    /// File letter a-h; `None` for a column off the board
    #[inline]
    #[must_use]
    pub fn file_char(self) -> Option<char> {
        u8::try_from(self.column)
            .ok()
            .filter(|column| *column < 8)
            .map(|column| char::from(b'a' + column))
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|row| (0..8).map(move |column| Position::new(row, column)))
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    #[inline]
    fn add(self, dir: Direction) -> Position {
        Position::new(self.row + dir.row_delta, self.column + dir.column_delta)
    }
}

impl AddAssign<Direction> for Position {
    #[inline]
    fn add_assign(&mut self, dir: Direction) {
        *self = *self + dir;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file_char() {
            Some(file) if self.is_inside() => write!(f, "{file}{}", self.rank()),
            _ => write!(f, "({}, {})", self.row, self.column),
        }
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = SquareError;

    fn try_from((row, column): (i8, i8)) -> Result<Self, Self::Error> {
        let pos = Position::new(row, column);
        if pos.is_inside() {
            Ok(pos)
        } else {
            Err(SquareError::OutOfBounds { row, column })
        }
    }
}

impl FromStr for Position {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let column = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as i8,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b @ b'1'..=b'8' => 8 - (b - b'0') as i8,
            _ => return Err(invalid()),
        };

        Ok(Position::new(row, column))
    }
}
