//! Terminal game outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Why a game was drawn. Checkmate is never one of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    Stalemate,
    FiftyMove,
    InsufficientMaterial,
    ThreefoldRepetition,
}

/// Why a game ended, decisive or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    Checkmate,
    Stalemate,
    FiftyMove,
    InsufficientMaterial,
    ThreefoldRepetition,
}

impl From<DrawReason> for EndReason {
    fn from(reason: DrawReason) -> Self {
        match reason {
            DrawReason::Stalemate => EndReason::Stalemate,
            DrawReason::FiftyMove => EndReason::FiftyMove,
            DrawReason::InsufficientMaterial => EndReason::InsufficientMaterial,
            DrawReason::ThreefoldRepetition => EndReason::ThreefoldRepetition,
        }
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// The winner checkmated the other side
    Win { winner: Color },
    Draw { reason: DrawReason },
}

impl GameResult {
    #[must_use]
    pub const fn win(winner: Color) -> Self {
        GameResult::Win { winner }
    }

    #[must_use]
    pub const fn draw(reason: DrawReason) -> Self {
        GameResult::Draw { reason }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Win { winner } => Some(winner),
            GameResult::Draw { .. } => None,
        }
    }

    #[must_use]
    pub fn reason(self) -> EndReason {
        match self {
            GameResult::Win { .. } => EndReason::Checkmate,
            GameResult::Draw { reason } => reason.into(),
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, GameResult::Draw { .. })
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::Stalemate => write!(f, "stalemate"),
            DrawReason::FiftyMove => write!(f, "fifty-move rule"),
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner } => write!(f, "{winner} wins by checkmate"),
            GameResult::Draw { reason } => write!(f, "draw by {reason}"),
        }
    }
}
