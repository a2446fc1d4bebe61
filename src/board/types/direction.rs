//! Direction vectors on the board grid.

use std::ops::{Add, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step on the grid, as (row delta, column delta).
///
/// Row 0 is Black's back rank, so `NORTH` (towards Black) decreases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub row_delta: i8,
    pub column_delta: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction::new(-1, 0);
    pub const SOUTH: Direction = Direction::new(1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(-1, 1);
    pub const NORTH_WEST: Direction = Direction::new(-1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(1, -1);

    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// Knight jumps: two steps one way, one step sideways
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(-2, 1),
        Direction::new(-2, -1),
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(-1, 2),
        Direction::new(1, 2),
        Direction::new(-1, -2),
        Direction::new(1, -2),
    ];

    #[inline]
    #[must_use]
    pub const fn new(row_delta: i8, column_delta: i8) -> Self {
        Direction {
            row_delta,
            column_delta,
        }
    }
}

impl Add for Direction {
    type Output = Direction;

    #[inline]
    fn add(self, rhs: Direction) -> Direction {
        Direction::new(
            self.row_delta + rhs.row_delta,
            self.column_delta + rhs.column_delta,
        )
    }
}

impl Mul<i8> for Direction {
    type Output = Direction;

    #[inline]
    fn mul(self, scalar: i8) -> Direction {
        Direction::new(self.row_delta * scalar, self.column_delta * scalar)
    }
}

impl Mul<Direction> for i8 {
    type Output = Direction;

    #[inline]
    fn mul(self, dir: Direction) -> Direction {
        dir * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_jumps_are_composites() {
        for v in [Direction::NORTH, Direction::SOUTH] {
            for h in [Direction::EAST, Direction::WEST] {
                assert!(Direction::KNIGHT_JUMPS.contains(&(2 * v + h)));
                assert!(Direction::KNIGHT_JUMPS.contains(&(2 * h + v)));
            }
        }
    }
}
