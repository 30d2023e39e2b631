use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{is_valid_placement, spawn_shape, Board, GameSession};
use blockfall::types::{GameCommand, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            session.tick(black_box(16));
            session.take_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let board = Board::new();
    let shape = spawn_shape(PieceKind::T);

    c.bench_function("is_valid_placement", |b| {
        b.iter(|| is_valid_placement(&board, &shape, black_box(4), black_box(10)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = GameSession::new(12345);
    session.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            session.apply(GameCommand::HardDrop);
            session.take_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let shape = spawn_shape(PieceKind::S);

    c.bench_function("rotate_cw", |b| b.iter(|| black_box(&shape).rotate_cw()));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_placement_check,
    bench_hard_drop,
    bench_rotate
);
criterion_main!(benches);
