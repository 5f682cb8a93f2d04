use minigames::core::Schulte;
use minigames::types::{GameAction, GameStatus, SCHULTE_ERROR_FLASH_MS};

#[test]
fn test_grid_holds_each_number_once() {
    let table = Schulte::new(5, 8);
    let mut numbers: Vec<u16> = (0..5u8)
        .flat_map(|r| (0..5u8).map(move |c| (r, c)))
        .map(|pos| table.cell(pos).unwrap().number)
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=25).collect::<Vec<u16>>());
    assert!(table.cell((5, 0)).is_none());
}

#[test]
fn test_nothing_counts_before_one() {
    let mut table = Schulte::new(3, 2);
    let two = table.position_of(2).unwrap();
    assert!(!table.select(two));
    assert_eq!(table.status(), GameStatus::Ready);
    assert!(table.error_cell().is_none());

    table.tick(5_000);
    assert_eq!(table.elapsed_ms(), 0);
}

#[test]
fn test_find_all_numbers_in_order() {
    let mut table = Schulte::new(4, 31);
    for n in 1..=16 {
        let pos = table.position_of(n).unwrap();
        assert!(table.apply_action(GameAction::Select(pos)));
        assert!(table.cell(pos).unwrap().found);
        table.tick(100);
    }
    assert!(table.finished());
    assert_eq!(table.status(), GameStatus::Won);
    // the clock stops on the last find
    assert_eq!(table.elapsed_ms(), 1500);
    table.tick(1000);
    assert_eq!(table.elapsed_ms(), 1500);
    assert!(!table.select((0, 0)));
}

#[test]
fn test_wrong_pick_flashes() {
    let mut table = Schulte::new(3, 4);
    table.select(table.position_of(1).unwrap());
    let wrong = table.position_of(5).unwrap();

    // the flash is a change of state even though nothing was found
    assert!(table.select(wrong));
    assert_eq!(table.current(), 2);
    assert_eq!(table.error_cell(), Some(wrong));

    table.tick(SCHULTE_ERROR_FLASH_MS - 1);
    assert_eq!(table.error_cell(), Some(wrong));
    table.tick(1);
    assert!(table.error_cell().is_none());
}

#[test]
fn test_highlight_and_size() {
    let mut table = Schulte::new(5, 1);
    assert!(!table.highlight());
    assert!(table.apply_action(GameAction::ToggleHighlight));
    assert!(table.highlight());

    assert!(table.apply_action(GameAction::SizeUp));
    assert_eq!(table.size(), 6);
    assert_eq!(table.total(), 36);
    assert!(table.highlight());

    assert!(!Schulte::new(9, 1).set_size(10));
    assert_eq!(Schulte::new(1, 1).size(), 3);
}

#[test]
fn test_restart_resets_progress() {
    let mut table = Schulte::new(3, 6);
    table.select(table.position_of(1).unwrap());
    table.tick(400);
    assert!(table.apply_action(GameAction::Restart));
    assert_eq!(table.current(), 1);
    assert_eq!(table.elapsed_ms(), 0);
    assert_eq!(table.status(), GameStatus::Ready);
}
