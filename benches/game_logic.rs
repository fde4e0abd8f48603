use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::{base_matrix, rotate, Board, GameState};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("tick", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            state.tick();
            if state.game_over() {
                state.restart();
            }
        });
    });
}

fn bench_clear_full_rows(c: &mut Criterion) {
    c.bench_function("clear_full_rows/4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20i8 {
                for x in 0..10i8 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows())
        });
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new();
    let matrix = base_matrix(PieceKind::T);

    c.bench_function("can_place/sweep", |b| {
        b.iter(|| {
            let mut open = 0u32;
            for y in 0..19i8 {
                for x in 0..8i8 {
                    if board.can_place(black_box(&matrix), x, y) {
                        open += 1;
                    }
                }
            }
            open
        });
    });
}

fn bench_rotate(c: &mut Criterion) {
    let matrix = base_matrix(PieceKind::J);
    c.bench_function("rotate", |b| b.iter(|| rotate(black_box(&matrix))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_full_rows,
    bench_can_place,
    bench_rotate
);
criterion_main!(benches);
