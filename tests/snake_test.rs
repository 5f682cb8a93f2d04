use minigames::core::{Sequence, Snake, SnakeMode};
use minigames::types::{Direction, GameAction, GameStatus, SNAKE_GRID};

/// Food always lands on the first free cell, (0, 0) at the start
fn scripted(mode: SnakeMode) -> Snake<Sequence> {
    Snake::with_rng(mode, Sequence::new(vec![0]))
}

fn steps(snake: &mut Snake<Sequence>, n: usize) {
    for _ in 0..n {
        assert!(snake.step());
    }
}

#[test]
fn test_waits_for_a_direction() {
    let mut snake = scripted(SnakeMode::Classic);
    assert_eq!(snake.status(), GameStatus::Ready);
    assert_eq!(snake.head(), (10, 10));
    assert_eq!(snake.food(), Some((0, 0)));

    snake.tick(1000);
    assert_eq!(snake.head(), (10, 10));

    assert!(snake.apply_action(GameAction::Move(Direction::Left)));
    assert_eq!(snake.status(), GameStatus::Playing);
}

#[test]
fn test_classic_wall_kills() {
    let mut snake = scripted(SnakeMode::Classic);
    snake.set_direction(Direction::Left);
    steps(&mut snake, 10);
    assert_eq!(snake.head(), (0, 10));
    assert!(snake.step());
    assert_eq!(snake.status(), GameStatus::GameOver);
    assert!(!snake.step());
    assert!(!snake.set_direction(Direction::Up));
}

#[test]
fn test_wrap_reenters_opposite_edge() {
    let mut snake = scripted(SnakeMode::Wrap);
    snake.set_direction(Direction::Left);
    steps(&mut snake, 11);
    assert_eq!(snake.head(), (SNAKE_GRID - 1, 10));
    assert_eq!(snake.status(), GameStatus::Playing);
}

#[test]
fn test_eating_grows_and_scores() {
    let mut snake = scripted(SnakeMode::Classic);
    snake.set_direction(Direction::Left);
    steps(&mut snake, 10);
    snake.set_direction(Direction::Up);
    steps(&mut snake, 10);

    assert_eq!(snake.head(), (0, 0));
    assert_eq!(snake.score(), 1);
    assert_eq!(snake.food(), Some((1, 0)));
    assert_eq!(snake.len(), 1);

    // growth shows on the next step, which eats again
    snake.set_direction(Direction::Right);
    steps(&mut snake, 1);
    assert_eq!(snake.len(), 2);
    assert_eq!(snake.score(), 2);

    // no turning back into the body
    assert!(!snake.set_direction(Direction::Left));
    assert!(snake.set_direction(Direction::Down));
}

#[test]
fn test_tick_steps_at_speed() {
    let mut snake = scripted(SnakeMode::Classic);
    assert_eq!(snake.step_interval_ms(), 100);
    snake.set_direction(Direction::Right);
    snake.tick(250);
    assert_eq!(snake.head(), (12, 10));
    snake.tick(50);
    assert_eq!(snake.head(), (13, 10));

    assert!(snake.apply_action(GameAction::SpeedUp));
    assert_eq!(snake.speed(), 11);
    assert!(snake.set_speed(500));
    assert_eq!(snake.speed(), 30);
}

#[test]
fn test_pause_stops_movement() {
    let mut snake = scripted(SnakeMode::Wrap);
    snake.set_direction(Direction::Down);
    assert!(snake.apply_action(GameAction::Pause));
    assert_eq!(snake.status(), GameStatus::Paused);
    snake.tick(1000);
    assert_eq!(snake.head(), (10, 10));
    assert!(!snake.set_direction(Direction::Left));

    assert!(snake.apply_action(GameAction::Pause));
    snake.tick(100);
    assert_eq!(snake.head(), (10, 11));
}

#[test]
fn test_restart_keeps_speed() {
    let mut snake = scripted(SnakeMode::Classic);
    snake.set_speed(5);
    snake.set_direction(Direction::Up);
    steps(&mut snake, 3);

    assert!(snake.apply_action(GameAction::Restart));
    assert_eq!(snake.head(), (10, 10));
    assert_eq!(snake.len(), 1);
    assert_eq!(snake.score(), 0);
    assert_eq!(snake.speed(), 5);
}
