//! Chess board representation and rules.
//!
//! An 8x8 mailbox of optional pieces plus per-side pawn-skip squares. Move
//! generation is pseudo-legal; legality is decided by playing the move on a
//! clone of the board and asking whether the mover's king is in check.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color};
//!
//! let board = Board::initial();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod make_move;
mod material;
mod movegen;
mod perft;
mod state;
mod state_string;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError, StateStringError};
pub use material::MaterialCount;
pub use state::Board;
pub use types::{CastleSide, CastlingRights, Color, Direction, Move, Piece, PieceKind, Position};

pub(crate) use types::PROMOTION_KINDS;
