//! Benchmarks for legality queries and game forking.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_santorini::{Ability, Game, GameBuilder, PieceId, PlayerId};

fn placed_game(size: usize, apollo: bool) -> Game {
    let mut builder = GameBuilder::new().grid_size(size);
    if apollo {
        builder = builder.ability(PlayerId::new(0), Ability::apollo());
    }
    let mut game = builder.build().unwrap();
    let mid = size as i32 / 2;
    for (row, col) in [(mid, mid), (0, 0), (mid, mid + 1), (0, 1)] {
        let player = game.current_player();
        game.place_piece(player, row, col).unwrap();
    }
    game
}

fn benchmark_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal moves");

    for size in [5, 9, 15] {
        let plain = placed_game(size, false);
        let apollo = placed_game(size, true);
        group.bench_with_input(BenchmarkId::new("base", size), &plain, |b, game| {
            b.iter(|| black_box(game.legal_moves(black_box(PieceId(0)))));
        });
        group.bench_with_input(BenchmarkId::new("apollo", size), &apollo, |b, game| {
            b.iter(|| black_box(game.legal_moves(black_box(PieceId(0)))));
        });
    }
    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let game = placed_game(5, false);

    c.bench_function("has_any_legal_move", |b| {
        b.iter(|| black_box(game.has_any_legal_move(black_box(PlayerId::new(0)))));
    });
    c.bench_function("highlights", |b| {
        b.iter(|| black_box(game.highlights()));
    });
}

/// The board is shared on clone, so this should not grow with grid size.
fn benchmark_fork(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fork");

    for size in [5, 15, 31] {
        let game = placed_game(size, false);
        group.bench_with_input(BenchmarkId::new("clone", size), &game, |b, game| {
            b.iter(|| black_box(game.clone()));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_legal_moves, benchmark_queries, benchmark_fork);
criterion_main!(benches);
