//! Game state controller.

use log::{debug, info, warn};

use super::history::RepetitionTable;
use super::result::{DrawReason, GameResult};
use crate::board::{Board, Color, Move, MoveError, PieceKind, Position, StateStringError};

/// Plies without a capture or pawn move that end the game (50 moves each)
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one state that end the game
pub const REPETITION_LIMIT: u32 = 3;

/// One game in progress, or finished.
///
/// Once a result is set the game is terminal: inspection still works, but
/// [`GameState::make_move`] rejects every move.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    result: Option<GameResult>,
    no_progress_plies: u32,
    state_string: String,
    history: RepetitionTable,
}

impl GameState {
    /// Start a game on `board` with `side_to_move` to play.
    ///
    /// The starting state is recorded once in the repetition history, and the
    /// position is checked for an immediate end (mate, stalemate, dead material).
    pub fn new(side_to_move: Color, board: Board) -> Self {
        let state_string = board.state_string(side_to_move);
        let mut history = RepetitionTable::new();
        history.increment(&state_string);

        let mut game = GameState {
            board,
            side_to_move,
            result: None,
            no_progress_plies: 0,
            state_string,
            history,
        };
        game.check_for_game_over();
        game
    }

    /// Standard starting position, White to move
    pub fn initial() -> Self {
        GameState::new(Color::White, Board::initial())
    }

    /// Start a game from a canonical state string
    pub fn from_state_string(state: &str) -> Result<Self, StateStringError> {
        let (board, side_to_move) = Board::from_state_string(state)?;
        Ok(GameState::new(side_to_move, board))
    }

    /// Seed the fifty-move counter, e.g. for a position taken from a game in progress
    #[must_use]
    pub fn with_no_progress_plies(mut self, plies: u32) -> Self {
        self.no_progress_plies = plies;
        if self.result.is_none() {
            self.check_for_game_over();
        }
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the side to move is in check
    pub fn is_in_check(&self) -> bool {
        self.board.in_check(self.side_to_move)
    }

    /// Canonical string of the current state
    pub fn state_string(&self) -> &str {
        &self.state_string
    }

    /// How often the current state has occurred since the last irreversible move
    pub fn repetition_count(&self) -> u32 {
        self.history.get(&self.state_string)
    }

    /// Plies since the last capture or pawn move
    pub fn no_progress_plies(&self) -> u32 {
        self.no_progress_plies
    }

    /// Legal moves of the piece on `pos`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to move.
    pub fn legal_moves_for(&self, pos: Position) -> Vec<Move> {
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.side_to_move => self.board.legal_moves_from(pos),
            _ => Vec::new(),
        }
    }

    /// Legal moves of every piece of `color`
    pub fn all_legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.board.legal_moves(color)
    }

    /// Look up the legal move from `from` to `to`.
    ///
    /// `promotion` picks among the four promotion moves; `None` selects the
    /// queen when the move promotes.
    pub fn find_legal_move(
        &self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let wanted = promotion.unwrap_or(PieceKind::Queen).promotion_or_queen();
        self.legal_moves_for(from).into_iter().find(|mv| {
            mv.to() == to && mv.promotion_kind().map_or(true, |kind| kind == wanted)
        })
    }

    /// Play `mv` for the side to move.
    ///
    /// Only moves returned by [`GameState::legal_moves_for`] or
    /// [`GameState::all_legal_moves_for`] are accepted; anything else, or any
    /// move after the game has ended, is rejected without touching the game.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if let Some(result) = self.result {
            warn!("rejected {mv}: game already over ({result})");
            return Err(MoveError::GameOver);
        }
        if !self.legal_moves_for(mv.from()).contains(&mv) {
            warn!("rejected illegal move {mv} for {}", self.side_to_move);
            return Err(MoveError::IllegalMove { mv });
        }

        let mover = self.side_to_move;
        let progress = self.board.play(mv);

        if progress {
            self.no_progress_plies = 0;
            // Earlier states can never recur after a capture or pawn move
            self.history.clear();
        } else {
            self.no_progress_plies += 1;
        }

        self.side_to_move = mover.opponent();
        self.update_state_string();
        debug!("{mover} played {mv}: {}", self.state_string);

        self.check_for_game_over();
        Ok(())
    }

    fn update_state_string(&mut self) {
        self.state_string = self.board.state_string(self.side_to_move);
        self.history.increment(&self.state_string);
    }

    /// Set the result if the game has ended; the first matching rule wins
    fn check_for_game_over(&mut self) {
        let result = if self.all_legal_moves_for(self.side_to_move).is_empty() {
            if self.board.in_check(self.side_to_move) {
                Some(GameResult::win(self.side_to_move.opponent()))
            } else {
                Some(GameResult::draw(DrawReason::Stalemate))
            }
        } else if self.board.insufficient_material() {
            Some(GameResult::draw(DrawReason::InsufficientMaterial))
        } else if self.no_progress_plies >= FIFTY_MOVE_PLIES {
            Some(GameResult::draw(DrawReason::FiftyMove))
        } else if self.repetition_count() == REPETITION_LIMIT {
            Some(GameResult::draw(DrawReason::ThreefoldRepetition))
        } else {
            None
        };

        if let Some(result) = result {
            info!("game over: {result}");
            self.result = Some(result);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::initial()
    }
}
