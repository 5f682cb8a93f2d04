use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minigames::core::{
    ActiveGame, Board, ChainReaction, GameOptions, Ruleset, Snake, SnakeMode, Tetris, Twenty48,
};
use minigames::term::{FrameBuffer, GameView, Hud, Viewport};
use minigames::types::{Direction, GameKind, PieceKind};

fn bench_tetris_tick(c: &mut Criterion) {
    let mut game = Tetris::new(Ruleset::Marathon, 12345);

    c.bench_function("tetris_tick_16ms", |b| {
        b.iter(|| {
            game.tick(black_box(16));
            if game.game_over() {
                game.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_tetris_rotate(c: &mut Criterion) {
    let mut game = Tetris::new(Ruleset::Classic, 12345);

    c.bench_function("tetris_rotate", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

fn bench_2048_slide(c: &mut Criterion) {
    c.bench_function("2048_slide_cycle", |b| {
        let mut game = Twenty48::new(7);
        b.iter(|| {
            for dir in Direction::ALL {
                game.slide(black_box(dir));
            }
            if !game.can_move() {
                game.restart();
            }
        })
    });
}

fn bench_chain_cascade(c: &mut Criterion) {
    c.bench_function("chain_reaction_cascade", |b| {
        b.iter(|| {
            let mut game = ChainReaction::new(10, 2);
            // Players alternate filling two halves until the board detonates.
            for turn in 0..400u32 {
                if game.winner().is_some() {
                    break;
                }
                game.tick(u32::MAX);
                let i = turn / 2;
                let (row, col) = if turn % 2 == 0 {
                    ((i / 5 % 10) as u8, (i % 5) as u8)
                } else {
                    ((i / 5 % 10) as u8, 5 + (i % 5) as u8)
                };
                game.place(row, col);
            }
            game.total_orbs()
        })
    });
}

fn bench_snake_tick(c: &mut Criterion) {
    let mut snake = Snake::new(SnakeMode::Wrap, 99);
    snake.set_direction(Direction::Right);

    c.bench_function("snake_tick_16ms", |b| {
        b.iter(|| {
            snake.tick(black_box(16));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let options = GameOptions::default();
    let game = ActiveGame::new(GameKind::ChainReaction, &options);
    let mut fb = FrameBuffer::new(0, 0);

    c.bench_function("render_chain_reaction_120x40", |b| {
        b.iter(|| {
            GameView.render_into(&game, &Hud::default(), Viewport::new(120, 40), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tetris_tick,
    bench_line_clear,
    bench_tetris_rotate,
    bench_2048_slide,
    bench_chain_cascade,
    bench_snake_tick,
    bench_render
);
criterion_main!(benches);
