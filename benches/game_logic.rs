use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kid_tetris::core::{Board, GameState};
use kid_tetris::term::{FrameBuffer, GameView, HudView, Viewport};
use kid_tetris::types::{GameAction, PieceKind, COLS, ROWS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| state.tick(black_box(16)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in ROWS as i8 - 4..ROWS as i8 {
                for x in 0..COLS as i8 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_lines())
        })
    });
}

fn bench_spawn_with_rescue(c: &mut Criterion) {
    c.bench_function("spawn_rescue", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 0..ROWS as i8 {
                for x in 0..COLS as i8 {
                    board.set(x, y, Some(PieceKind::O));
                }
            }
            let mut state = GameState::with_board(7, board);
            black_box(state.spawn())
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.apply_action(GameAction::MoveLeft));
            black_box(state.apply_action(GameAction::MoveRight))
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(state.apply_action(GameAction::Rotate)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop_lock_spawn", |b| {
        b.iter(|| black_box(state.apply_action(GameAction::HardDrop)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let snap = state.snapshot();
    let vp = Viewport::new(100, 45);
    let view = GameView::for_viewport(true, vp);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let hud = HudView::default();

    c.bench_function("render_kid_mode", |b| {
        b.iter(|| view.render_into(black_box(&snap), &hud, vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn_with_rescue,
    bench_move,
    bench_rotate,
    bench_hard_drop,
    bench_render
);
criterion_main!(benches);
