//! Benchmarks for move generation and state bookkeeping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, Color};
use chess_rules::game::GameState;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq -";

fn parse(state: &str) -> (Board, Color) {
    Board::from_state_string(state).expect("valid state")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let board = Board::initial();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(Color::White, black_box(depth)))
        });
    }

    let (kiwipete, side) = parse(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(side, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::initial();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves(Color::White)))
    });

    for (name, state) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let (board, side) = parse(state);
        group.bench_function(name, |b| b.iter(|| black_box(board.legal_moves(side))));
    }

    group.finish();
}

fn bench_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("state");

    let (board, side) = parse(KIWIPETE);
    group.bench_function("encode", |b| b.iter(|| black_box(board.state_string(side))));
    group.bench_function("decode", |b| {
        b.iter(|| Board::from_state_string(black_box(KIWIPETE)))
    });
    group.bench_function("insufficient_material", |b| {
        b.iter(|| black_box(board.insufficient_material()))
    });

    group.bench_function("game_move", |b| {
        let game = GameState::initial();
        let mv = game
            .find_legal_move(
                "g1".parse().expect("square"),
                "f3".parse().expect("square"),
                None,
            )
            .expect("legal");
        b.iter(|| {
            let mut copy = game.clone();
            copy.make_move(black_box(mv))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_state);
criterion_main!(benches);
