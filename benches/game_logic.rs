use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Board, Game};
use gridfall::types::PieceKind;
use gridfall::Engine;

fn bench_advance(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            engine.advance(black_box(16));
        })
    });
}

fn bench_sweep(c: &mut Criterion) {
    c.bench_function("sweep_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.sweep_full_rows();
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            game.spawn_piece_of(black_box(PieceKind::T));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            game.move_horizontal(black_box(1));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            game.rotate(black_box(true));
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_sweep,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
