use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_snake::core::{GameSnapshot, GameState, Layout, LetterBag, WordValidator};
use word_snake::term::{FrameBuffer, GameView, Viewport};
use word_snake::types::{Cell, Direction, GameAction, GridConfig};

fn long_snake() -> GameState {
    // Serpentine body filling the top six rows, head at (19, 5) facing down.
    let mut snake = Vec::new();
    for y in 0..6i16 {
        for i in 0..20i16 {
            let x = if y % 2 == 0 { 19 - i } else { i };
            snake.push(Cell::new(x, y));
        }
    }
    snake.reverse();
    let letters: Vec<char> = "STALEWORDSNAKE"
        .chars()
        .cycle()
        .take(snake.len() - 1)
        .collect();
    GameState::with_layout(
        GridConfig::default(),
        12345,
        Layout {
            snake,
            snake_letters: letters,
            direction: Direction::Down,
            tiles: Vec::new(),
        },
    )
}

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GridConfig::default(), 12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.tick());
        })
    });
}

fn bench_submit_and_remove(c: &mut Criterion) {
    let validator = WordValidator::new(HashSet::from(["stale".to_string()]));
    let base = long_snake();

    c.bench_function("submit_word_then_tick", |b| {
        b.iter(|| {
            let mut state = base.clone();
            for letter in "STALE".chars() {
                state.apply_action(GameAction::TypeLetter(letter), &validator);
            }
            state.apply_action(GameAction::SubmitWord, &validator);
            black_box(state.tick());
        })
    });
}

fn bench_letter_bag(c: &mut Criterion) {
    let mut bag = LetterBag::new(7);

    c.bench_function("letter_bag_draw", |b| {
        b.iter(|| black_box(bag.draw()))
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let state = long_snake();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_into_render_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            black_box(fb.glyphs().len());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_submit_and_remove,
    bench_letter_bag,
    bench_snapshot_and_render
);
criterion_main!(benches);
