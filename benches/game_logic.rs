use criterion::{black_box, criterion_group, criterion_main, Criterion};
use microtris::core::{Board, GameSnapshot, GameState, Tetromino};
use microtris::term::{FrameBuffer, GameView, Viewport};
use microtris::types::{Color, GameAction, InputFrame, PieceKind, FRAME_MS};

const DT: f64 = FRAME_MS as f64 / 1000.0;

fn started_game() -> GameState {
    let mut state = GameState::new(12345);
    state.update(&InputFrame::new().with(GameAction::Start), 0.0);
    state
}

fn bench_update(c: &mut Criterion) {
    let mut state = started_game();
    let input = InputFrame::new()
        .with(GameAction::MoveLeft)
        .with(GameAction::SoftDrop);
    let mut now = 0.0;

    c.bench_function("update_frame", |b| {
        b.iter(|| {
            now += DT;
            if !state.started() {
                state.start(now);
            }
            black_box(state.update(black_box(&input), now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let gray = Color::rgb(90, 90, 90);
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, gray);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_is_valid(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, 1);
    }
    let piece = Tetromino::spawn(PieceKind::T, 0.0).shifted(0, 17);

    c.bench_function("is_valid", |b| {
        b.iter(|| black_box(black_box(&piece).is_valid(&board)))
    });
}

fn bench_ghost(c: &mut Criterion) {
    let state = started_game();
    c.bench_function("ghost_y", |b| b.iter(|| black_box(state.ghost_y())));
}

fn bench_render(c: &mut Criterion) {
    let state = started_game();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_line_clear,
    bench_is_valid,
    bench_ghost,
    bench_render
);
criterion_main!(benches);
