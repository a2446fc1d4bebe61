use std::env;
use std::process::ExitCode;

use chess_rules::board::{PieceKind, Position};
use chess_rules::game::GameState;

fn parse_coord(coord: &str) -> Option<(Position, Position, Option<PieceKind>)> {
    let from = coord.get(0..2)?.parse().ok()?;
    let to = coord.get(2..4)?.parse().ok()?;
    let promotion = coord.chars().nth(4).and_then(PieceKind::from_char);
    Some((from, to, promotion))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "-h" || a == "--help") {
        eprintln!("usage: game_status [--state <state string>] <move1> <move2> ...");
        return ExitCode::SUCCESS;
    }

    let (mut game, moves) = match args.first().map(String::as_str) {
        Some("--state") => {
            let Some(state) = args.get(1) else {
                eprintln!("--state needs a state string");
                return ExitCode::FAILURE;
            };
            match GameState::from_state_string(state) {
                Ok(game) => (game, &args[2..]),
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => (GameState::initial(), &args[..]),
    };

    for coord in moves {
        let Some((from, to, promotion)) = parse_coord(coord) else {
            eprintln!("cannot parse move '{coord}'");
            return ExitCode::FAILURE;
        };
        let Some(mv) = game.find_legal_move(from, to, promotion) else {
            eprintln!("illegal move '{coord}'");
            return ExitCode::FAILURE;
        };
        if let Err(e) = game.make_move(mv) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = game.all_legal_moves_for(game.side_to_move());
    println!("side_to_move: {}", game.side_to_move());
    println!("state: {}", game.state_string());
    println!("in_check: {}", game.is_in_check());
    println!("no_progress_plies: {}", game.no_progress_plies());
    match game.result() {
        Some(result) => println!("result: {result}"),
        None => println!("result: in progress"),
    }
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
