use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use tictactoe_engine::{best_move, calculate_minimax_move, minimax, Board, GameState, Mark, Position};

fn bench_minimax_empty_board() {
    let mut board = Board::new();
    minimax(&mut board, Mark::X);
}

fn bench_best_move_empty_board() {
    let mut board = Board::new();
    best_move(&mut board, Mark::X).unwrap();
}

fn bench_best_move_mid_game() {
    let mut board = Board::new();
    board.apply(Position::new(0, 0), Mark::X).unwrap();
    board.apply(Position::new(1, 1), Mark::O).unwrap();
    board.apply(Position::new(0, 1), Mark::X).unwrap();
    board.apply(Position::new(0, 2), Mark::O).unwrap();

    best_move(&mut board, Mark::X).unwrap();
}

fn bench_full_game_minimax_vs_minimax() {
    let mut state = GameState::new();
    while !state.is_over() {
        let mv = calculate_minimax_move(&state).unwrap();
        state.place_mark(mv).unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("minimax_empty_board", |b| b.iter(bench_minimax_empty_board));

    group.bench_function("best_move_empty_board", |b| {
        b.iter(bench_best_move_empty_board)
    });

    group.bench_function("best_move_mid_game", |b| b.iter(bench_best_move_mid_game));

    group.bench_function("full_game_minimax_vs_minimax", |b| {
        b.iter(bench_full_game_minimax_vs_minimax)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
