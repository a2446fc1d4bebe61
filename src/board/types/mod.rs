//! Core chess types.
//!
//! This module contains the value types shared by the board and the game:
//! - `PieceKind`, `Color` and `Piece` - pieces with their moved flag
//! - `Position` and `Direction` - coordinate algebra on the 8x8 grid
//! - `Move` - the move variants
//! - `CastleSide` and `CastlingRights` - castling state

mod castling;
mod direction;
mod moves;
mod piece;
mod position;

pub use castling::{CastleSide, CastlingRights};
pub use direction::Direction;
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;

pub(crate) use piece::PROMOTION_KINDS;
