use minigames::core::ChainReaction;
use minigames::types::{Direction, GameAction, GameStatus, CHAIN_WAVE_MS};

#[test]
fn test_capacity_by_position() {
    let game = ChainReaction::new(10, 2);
    assert_eq!(game.cell(0, 0).unwrap().capacity, 2);
    assert_eq!(game.cell(0, 5).unwrap().capacity, 3);
    assert_eq!(game.cell(9, 4).unwrap().capacity, 3);
    assert_eq!(game.cell(4, 4).unwrap().capacity, 4);
    assert!(game.cell(10, 0).is_none());
}

#[test]
fn test_players_alternate_and_own_cells() {
    let mut game = ChainReaction::new(10, 2);
    assert_eq!(game.current_player(), 1);
    assert!(game.place(0, 0));
    assert_eq!(game.current_player(), 2);

    // someone else's cell
    assert!(!game.place(0, 0));
    assert_eq!(game.current_player(), 2);

    assert!(game.place(9, 9));
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.score_of(1), 1);
    assert_eq!(game.score_of(2), 1);
}

#[test]
fn test_explosion_replays_before_next_turn() {
    let mut game = ChainReaction::new(10, 2);
    game.place(0, 0);
    game.place(9, 9);
    assert!(game.place(0, 0));

    let corner = game.cell(0, 0).unwrap();
    assert_eq!(corner.orbs, 0);
    assert_eq!(game.cell(0, 1).unwrap().owner, Some(1));
    assert_eq!(game.cell(1, 0).unwrap().owner, Some(1));
    assert_eq!(game.reaction().transfers.len(), 2);
    assert_eq!(game.reaction().waves, 1);

    assert!(game.is_animating());
    assert_eq!(game.transfers_in_flight().count(), 2);
    assert!(!game.place(9, 9));

    game.tick(CHAIN_WAVE_MS);
    assert!(!game.is_animating());
    assert!(game.place(9, 9));
}

#[test]
fn test_capture_wins_the_game() {
    // 2x2: every cell is a corner and explodes at two orbs
    let mut game = ChainReaction::new(2, 2);
    game.place(0, 0);
    game.place(1, 1);
    game.place(0, 0);
    game.tick(CHAIN_WAVE_MS);
    assert_eq!(game.score_of(1), 2);
    assert_eq!(game.status(), GameStatus::Playing);

    // player 2 explodes into both of player 1's cells
    assert!(game.place(1, 1));
    assert_eq!(game.winner(), Some(2));
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.score_of(1), 0);
    assert_eq!(game.score_of(2), game.total_orbs());

    game.tick(10 * CHAIN_WAVE_MS);
    assert!(!game.place(0, 0));
}

#[test]
fn test_cursor_and_activate() {
    let mut game = ChainReaction::new(8, 3);
    assert_eq!(game.players(), 3);
    assert!(game.apply_action(GameAction::Cursor(Direction::Right)));
    assert!(game.apply_action(GameAction::Cursor(Direction::Down)));
    assert_eq!(game.cursor().pos(), (1, 1));

    assert!(game.apply_action(GameAction::Activate));
    assert_eq!(game.cell(1, 1).unwrap().owner, Some(1));

    assert!(game.apply_action(GameAction::Select((7, 7))));
    assert_eq!(game.cursor().pos(), (7, 7));
    assert_eq!(game.cell(7, 7).unwrap().owner, Some(2));
}

#[test]
fn test_player_count_is_clamped() {
    assert_eq!(ChainReaction::new(10, 1).players(), 2);
    assert_eq!(ChainReaction::new(10, 9).players(), 6);
}

#[test]
fn test_restart_empties_the_board() {
    let mut game = ChainReaction::new(10, 2);
    game.place(3, 3);
    assert!(game.apply_action(GameAction::Restart));
    assert_eq!(game.total_orbs(), 0);
    assert_eq!(game.current_player(), 1);
    assert!(game.cell(3, 3).unwrap().owner.is_none());
}
