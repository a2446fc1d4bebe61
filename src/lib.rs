pub mod board;
pub mod game;

pub use board::{Board, Color, Move, Piece, PieceKind, Position};
pub use game::{DrawReason, EndReason, GameResult, GameState};
