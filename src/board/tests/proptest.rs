//! Property-based tests using proptest.

use crate::board::{Board, Color, Move};
use crate::game::GameState;
use proptest::prelude::*;
use rand::prelude::*;

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves from the initial position
fn random_game(seed: u64, plies: usize) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::initial();
    for _ in 0..plies {
        if game.is_game_over() {
            break;
        }
        let moves = game.all_legal_moves_for(game.side_to_move());
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.make_move(*mv).expect("generated move is legal");
    }
    game
}

fn sorted(moves: Vec<Move>) -> Vec<String> {
    let mut out: Vec<String> = moves.iter().map(|mv| format!("{mv:?}")).collect();
    out.sort();
    out
}

proptest! {
    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_self_check(seed in seed_strategy(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        let side = game.side_to_move();
        for mv in game.all_legal_moves_for(side) {
            let mut copy = game.board().clone();
            copy.play(mv);
            prop_assert!(!copy.in_check(side), "{mv} leaves {side} in check");
        }
    }

    /// Property: exploring moves on a clone never changes the game board
    #[test]
    fn prop_clone_isolation(seed in seed_strategy(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        let before = game.board().clone();
        for mv in game.all_legal_moves_for(game.side_to_move()) {
            let mut copy = game.board().clone();
            copy.play(mv);
        }
        prop_assert_eq!(game.board(), &before);
    }

    /// Property: a state string rebuilds a board with the same string and moves
    #[test]
    fn prop_state_string_round_trip(seed in seed_strategy(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        let (board, side) = Board::from_state_string(game.state_string())
            .expect("own state string parses");

        prop_assert_eq!(side, game.side_to_move());
        prop_assert_eq!(board.state_string(side), game.state_string());
        prop_assert_eq!(
            sorted(board.legal_moves(side)),
            sorted(game.all_legal_moves_for(side))
        );
    }

    /// Property: a side without legal moves has already lost or drawn
    #[test]
    fn prop_no_moves_means_game_over(seed in seed_strategy(), plies in move_count_strategy()) {
        let game = random_game(seed, plies);
        if game.all_legal_moves_for(game.side_to_move()).is_empty() {
            prop_assert!(game.is_game_over());
        }
        for color in Color::BOTH {
            prop_assert!(game.board().king_position(color).is_some());
        }
    }
}
