//! Game controller: turn order, legal moves, draw bookkeeping and results.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position};
//! use chess_rules::game::GameState;
//!
//! let mut game = GameState::initial();
//! let e2: Position = "e2".parse().unwrap();
//! let e4: Position = "e4".parse().unwrap();
//! let mv = game.find_legal_move(e2, e4, None).unwrap();
//! game.make_move(mv).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert!(!game.is_game_over());
//! ```

mod controller;
mod history;
mod result;

pub use controller::{GameState, FIFTY_MOVE_PLIES, REPETITION_LIMIT};
pub use result::{DrawReason, EndReason, GameResult};
