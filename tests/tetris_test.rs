use minigames::core::tetris::scoring::{drop_interval_ms, level_for_lines, marathon_line_score};
use minigames::core::{DropOutcome, Ruleset, Sequence, Tetris};
use minigames::types::{Direction, GameAction, GameStatus, PieceKind};

/// Classic game that only ever deals I pieces
fn i_only() -> Tetris<Sequence> {
    Tetris::with_rng(Ruleset::Classic, Sequence::new(vec![0]))
}

fn drop_to_floor<R: minigames::core::RandomSource>(game: &mut Tetris<R>) -> DropOutcome {
    loop {
        let outcome = game.drop_tick();
        if outcome != DropOutcome::Moved {
            return outcome;
        }
    }
}

fn shift<R: minigames::core::RandomSource>(game: &mut Tetris<R>, dx: i8) {
    let dir = if dx < 0 { Direction::Left } else { Direction::Right };
    for _ in 0..dx.unsigned_abs() {
        assert!(game.apply_action(GameAction::Move(dir)));
    }
}

#[test]
fn test_spawn_position() {
    let game = i_only();
    let active = game.active().unwrap();
    assert_eq!(active.kind, PieceKind::I);
    assert_eq!((active.x, active.y), (3, 0));
    assert_eq!(game.next_piece(), PieceKind::I);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_classic_line_clear() {
    let mut game = i_only();

    // two flat pieces fill columns 0..8 of the bottom row
    shift(&mut game, -3);
    assert_eq!(drop_to_floor(&mut game), DropOutcome::Locked { lines: 0 });
    shift(&mut game, 1);
    assert_eq!(drop_to_floor(&mut game), DropOutcome::Locked { lines: 0 });

    // two upright pieces close columns 8 and 9
    assert!(game.apply_action(GameAction::Rotate));
    shift(&mut game, 5);
    assert_eq!(drop_to_floor(&mut game), DropOutcome::Locked { lines: 0 });
    assert!(game.apply_action(GameAction::Rotate));
    shift(&mut game, 6);
    assert_eq!(drop_to_floor(&mut game), DropOutcome::Locked { lines: 1 });

    assert_eq!(game.lines(), 1);
    assert_eq!(game.score(), 10);
    // what is left of the upright pieces fell one row
    assert_eq!(game.board().filled_count(), 6);
    assert!(game.board().is_occupied(8, 19));
    assert!(!game.board().is_occupied(0, 19));
}

#[test]
fn test_rotation_kicks_off_the_wall() {
    let mut game = i_only();
    assert!(game.rotate());
    shift(&mut game, 6);
    assert_eq!(game.active().unwrap().x, 9);

    // flat against the wall would need a kick of -3: refused
    assert!(!game.rotate());
    assert_eq!(game.active().unwrap().shape.cols(), 1);

    // two columns in, a -1 kick is enough
    shift(&mut game, -2);
    assert!(game.rotate());
    let active = game.active().unwrap();
    assert_eq!(active.x, 6);
    assert!(active.cells().iter().all(|&(x, _)| (0..10).contains(&x)));
}

#[test]
fn test_gravity_waits_for_the_interval() {
    let mut game = i_only();
    assert_eq!(game.drop_interval_ms(), 1000);
    game.tick(1000);
    assert_eq!(game.active().unwrap().y, 0);
    game.tick(16);
    assert_eq!(game.active().unwrap().y, 1);
}

#[test]
fn test_pause_freezes_everything() {
    let mut game = i_only();
    assert!(game.apply_action(GameAction::Pause));
    assert_eq!(game.status(), GameStatus::Paused);

    game.tick(5000);
    assert!(!game.apply_action(GameAction::Move(Direction::Left)));
    assert!(!game.apply_action(GameAction::Rotate));
    assert_eq!(game.active().unwrap().y, 0);

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.apply_action(GameAction::Move(Direction::Left)));
}

#[test]
fn test_hard_drop_marathon_only() {
    let mut classic = Tetris::new(Ruleset::Classic, 7);
    assert!(!classic.apply_action(GameAction::HardDrop));
    assert_eq!(classic.board().filled_count(), 0);

    let mut marathon = Tetris::new(Ruleset::Marathon, 7);
    let start_y = marathon.active().unwrap().y;
    let ghost_y = marathon.ghost_y().unwrap();
    assert!(marathon.apply_action(GameAction::HardDrop));
    assert_eq!(marathon.score(), 2 * (ghost_y - start_y) as u32);
    assert_eq!(marathon.board().filled_count(), 4);
}

#[test]
fn test_soft_drop_scores_in_marathon() {
    let mut marathon = Tetris::new(Ruleset::Marathon, 3);
    assert!(marathon.apply_action(GameAction::SoftDrop));
    assert!(marathon.apply_action(GameAction::SoftDrop));
    assert_eq!(marathon.score(), 2);

    let mut classic = i_only();
    assert!(classic.apply_action(GameAction::SoftDrop));
    assert_eq!(classic.score(), 0);
}

#[test]
fn test_game_lifecycle() {
    let mut game = i_only();

    // stack flat pieces in the spawn columns until the next one cannot enter
    let mut outcome = DropOutcome::Moved;
    for _ in 0..1000 {
        outcome = game.drop_tick();
        if outcome == DropOutcome::GameOver {
            break;
        }
    }
    assert_eq!(outcome, DropOutcome::GameOver);
    assert_eq!(game.status(), GameStatus::GameOver);
    assert!(game.active().is_none());
    assert!(!game.apply_action(GameAction::Move(Direction::Left)));
    assert!(!game.apply_action(GameAction::Pause));
    assert_eq!(game.drop_tick(), DropOutcome::Ignored);

    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.board().filled_count(), 0);
    assert_eq!(game.score(), 0);
    assert!(game.active().is_some());
}

#[test]
fn test_marathon_bag_deals_every_piece() {
    let mut game = Tetris::new(Ruleset::Marathon, 99);
    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(game.active().unwrap().kind);
        assert!(game.apply_action(GameAction::HardDrop));
    }
    for kind in PieceKind::ALL {
        assert!(seen.contains(&kind), "{kind:?} missing from the bag");
    }
}

#[test]
fn test_marathon_scoring_tables() {
    assert_eq!(marathon_line_score(1, 0), 40);
    assert_eq!(marathon_line_score(4, 2), 3600);
    assert_eq!(level_for_lines(9), 0);
    assert_eq!(level_for_lines(25), 2);
    assert_eq!(drop_interval_ms(0), 1000);
    assert_eq!(drop_interval_ms(8), 160);
    assert_eq!(drop_interval_ms(40), 120);
}

#[test]
fn test_same_seed_same_pieces() {
    let a = Tetris::new(Ruleset::Classic, 2024);
    let b = Tetris::new(Ruleset::Classic, 2024);
    assert_eq!(a.active().unwrap().kind, b.active().unwrap().kind);
    assert_eq!(a.next_piece(), b.next_piece());
}
