use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, Piece};
use blockfall::types::{Intent, PieceKind, RotationPolicy};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.start();
            }
            state.tick(black_box(16))
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::default();
    let start = Piece::spawn(PieceKind::T).translated(4, 8);

    for policy in [RotationPolicy::PivotAnchored, RotationPolicy::WallKick] {
        c.bench_function(&format!("rotate_{}", policy.as_str()), |b| {
            let mut piece = start;
            b.iter(|| piece.rotate_with(black_box(policy), &board))
        });
    }
}

fn bench_apply_intent(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("apply_intent_shift", |b| {
        let mut right = true;
        b.iter(|| {
            let intent = if right { Intent::MoveRight } else { Intent::MoveLeft };
            if !state.apply_intent(black_box(intent)) {
                right = !right;
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_rotate,
    bench_apply_intent
);
criterion_main!(benches);
