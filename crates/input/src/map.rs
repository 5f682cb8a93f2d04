//! Key mapping from terminal events to game and menu actions.

use crate::types::{Direction, GameAction, GameKind, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow keys, WASD and hjkl all steer.
fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Direction::Down),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Direction::Up),
        _ => None,
    }
}

/// Map keyboard input to an action of the given game.
pub fn map_key(kind: GameKind, key: KeyEvent) -> Option<GameAction> {
    if let KeyCode::Char('r') | KeyCode::Char('R') = key.code {
        return Some(GameAction::Restart);
    }

    match kind {
        GameKind::TetrisClassic | GameKind::TetrisMarathon => match key.code {
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
            code => match direction_of(code)? {
                Direction::Up => Some(GameAction::Rotate),
                Direction::Down => Some(GameAction::SoftDrop),
                dir => Some(GameAction::Move(dir)),
            },
        },

        GameKind::Twenty48 => direction_of(key.code).map(GameAction::Move),

        GameKind::SnakeClassic | GameKind::SnakeWrap => match key.code {
            KeyCode::Enter => Some(GameAction::Activate),
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                Some(GameAction::Pause)
            }
            KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::SpeedUp),
            KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::SpeedDown),
            code => direction_of(code).map(GameAction::Move),
        },

        GameKind::ChainReaction
        | GameKind::SlidingPuzzle
        | GameKind::SwapPuzzle
        | GameKind::Schulte => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Activate),
            KeyCode::Char(']') | KeyCode::Char('+') if kind != GameKind::ChainReaction => {
                Some(GameAction::SizeUp)
            }
            KeyCode::Char('[') | KeyCode::Char('-') if kind != GameKind::ChainReaction => {
                Some(GameAction::SizeDown)
            }
            KeyCode::Char('t') | KeyCode::Char('T') if kind == GameKind::Schulte => {
                Some(GameAction::ToggleHighlight)
            }
            code => direction_of(code).map(GameAction::Cursor),
        },
    }
}

/// Map keyboard input on the portal screen.
///
/// Printable characters go to the search box, so quitting and the filter
/// toggles live on Esc and control chords.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Up => Some(MenuAction::Up),
        KeyCode::Down => Some(MenuAction::Down),
        KeyCode::Tab => Some(MenuAction::NextCategory),
        KeyCode::Enter => Some(MenuAction::Launch),
        KeyCode::Backspace => Some(MenuAction::Backspace),
        KeyCode::Esc => Some(MenuAction::Quit),
        KeyCode::Char('c') if ctrl => Some(MenuAction::Quit),
        KeyCode::Char('f') if ctrl => Some(MenuAction::ToggleFeatured),
        KeyCode::Char('u') if ctrl => Some(MenuAction::ClearSearch),
        KeyCode::Char(c) if !ctrl => Some(MenuAction::Type(c)),
        _ => None,
    }
}

/// Check if key should quit the program from inside a game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Check if key leaves the game and returns to the portal.
pub fn is_back(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
}
