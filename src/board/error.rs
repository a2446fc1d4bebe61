//! Error types for board and game operations.

use std::fmt;

use super::{Move, Position};

/// Error type for state string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateStringError {
    /// State string has too few parts (needs 4)
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// En passant field is not a square
    InvalidEnPassant { found: String },
    /// En passant square is not behind a pawn the other side could just have pushed
    EnPassantWrongRank { square: Position, expected_rank: i8 },
    /// Placement does not describe exactly eight rows
    RowCount { found: usize },
    /// A row of the placement does not cover exactly eight columns
    RowWidth { row: usize, columns: usize },
}

impl fmt::Display for StateStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateStringError::TooFewParts { found } => {
                write!(f, "State string must have 4 parts, found {found}")
            }
            StateStringError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in state string")
            }
            StateStringError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in state string")
            }
            StateStringError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            StateStringError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            StateStringError::EnPassantWrongRank {
                square,
                expected_rank,
            } => write!(
                f,
                "En passant square {square} must be on rank {expected_rank}"
            ),
            StateStringError::RowCount { found } => {
                write!(f, "Placement has {found} rows, expected 8")
            }
            StateStringError::RowWidth { row, columns } => {
                write!(f, "Row {row} of the placement covers {columns} columns, expected 8")
            }
        }
    }
}

impl std::error::Error for StateStringError {}

/// Error type for rejected move submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// Move is not legal in the current position
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is over, no further moves accepted"),
            MoveError::IllegalMove { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row or column outside 0-7
    OutOfBounds { row: i8, column: i8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { row, column } => {
                write!(f, "Square ({row}, {column}) out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
