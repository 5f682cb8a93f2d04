//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by every game, the input layer,
//! the terminal views and the portal. All types are plain data with no external
//! dependencies, so they can be used from headless logic and rendering alike.
//!
//! # Grid Dimensions
//!
//! | Game | Grid |
//! |------|------|
//! | Tetris | 10 x 20 |
//! | 2048 | 4 x 4 |
//! | Chain Reaction | 10 x 10 (8 x 8 compact) |
//! | Jigsaw | 3 x 3 .. 6 x 6 |
//! | Schulte | 3 x 3 .. 9 x 9 |
//! | Snake | 20 x 20 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `CLASSIC_DROP_MS` | 1000 | Classic Tetris gravity |
//! | `CHAIN_WAVE_MS` | 150 | Delay between chain reaction waves |
//! | `SCHULTE_ERROR_FLASH_MS` | 300 | Wrong-pick highlight duration |
//! | `BONUS_FOOD_MS` | 3000 | Snake bonus food lifetime |
//!
//! # Examples
//!
//! ```
//! use minigames_types::{Direction, GameAction, GameKind, PieceKind};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_ne!(GameAction::Move(Direction::Up), GameAction::Rotate);
//! assert_eq!(GameKind::from_slug("2048"), Some(GameKind::Twenty48));
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Tetris board width in cells
pub const TETRIS_WIDTH: u8 = 10;

/// Tetris board height in cells
pub const TETRIS_HEIGHT: u8 = 20;

/// Classic Tetris gravity: one row per second, regardless of progress
pub const CLASSIC_DROP_MS: u32 = 1000;

/// Marathon drop intervals by level (milliseconds per row)
///
/// Index 0 = Level 0, Index 8 = Level 8
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Marathon drop interval from level 9 onward
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Lines needed to advance one Marathon level
pub const LINES_PER_LEVEL: u32 = 10;

/// Marathon line clear table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0; multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per classic line clear, multiplied by lines squared
pub const CLASSIC_LINE_POINTS: u32 = 10;

/// 2048 grid edge length
pub const G2048_SIZE: usize = 4;

/// Chance (out of 10) that a spawned 2048 tile is a 2 rather than a 4
pub const G2048_TWO_IN_TEN: u32 = 9;

/// Chain Reaction grid edge length
pub const CHAIN_GRID: u8 = 10;

/// Chain Reaction grid edge length for the compact layout
pub const CHAIN_GRID_COMPACT: u8 = 8;

/// Delay between two chain reaction waves
pub const CHAIN_WAVE_MS: u32 = 150;

/// Chain Reaction player bounds
pub const CHAIN_MIN_PLAYERS: u8 = 2;
pub const CHAIN_MAX_PLAYERS: u8 = 6;

/// Jigsaw grid bounds (pieces per edge)
pub const JIGSAW_MIN_SIZE: u8 = 3;
pub const JIGSAW_MAX_SIZE: u8 = 6;
pub const JIGSAW_DEFAULT_SIZE: u8 = 3;

/// Random moves per tile used to scramble the sliding puzzle
pub const JIGSAW_SCRAMBLE_FACTOR: u32 = 10;

/// Schulte grid bounds
pub const SCHULTE_MIN_SIZE: u8 = 3;
pub const SCHULTE_MAX_SIZE: u8 = 9;
pub const SCHULTE_DEFAULT_SIZE: u8 = 5;

/// Number of distinct Schulte digit colors
pub const SCHULTE_COLORS: u8 = 6;

/// How long a wrong Schulte pick stays highlighted
pub const SCHULTE_ERROR_FLASH_MS: u32 = 300;

/// Snake grid edge length
pub const SNAKE_GRID: i16 = 20;

/// Snake speed in steps per second
pub const SNAKE_DEFAULT_SPEED: u32 = 10;
pub const SNAKE_MIN_SPEED: u32 = 1;
pub const SNAKE_MAX_SPEED: u32 = 30;

/// Bonus food appears every time the score reaches a multiple of this
pub const BONUS_FOOD_EVERY: u32 = 5;

/// Bonus food lifetime
pub const BONUS_FOOD_MS: u32 = 3000;

/// Bonus food value
pub const BONUS_FOOD_POINTS: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(CLASSIC_DROP_MS, 1000);
        assert_eq!(CHAIN_WAVE_MS, 150);
        assert_eq!(SCHULTE_ERROR_FLASH_MS, 300);
        assert_eq!(BONUS_FOOD_MS, 3000);
    }

    #[test]
    fn direction_opposites_cancel() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            let (dx, dy) = d.delta();
            assert_eq!(d.opposite().delta(), (-dx, -dy));
            assert_eq!(d.is_vertical(), d.opposite().is_vertical());
        }
    }

    #[test]
    fn game_kind_slugs_are_unique() {
        for a in GameKind::ALL {
            assert_eq!(GameKind::from_slug(a.slug()), Some(a));
        }
    }

    #[test]
    fn cursor_clamps_to_grid() {
        let mut c = Cursor::new(3, 3);
        c.step(Direction::Up);
        c.step(Direction::Left);
        assert_eq!((c.row, c.col), (0, 0));
        for _ in 0..5 {
            c.step(Direction::Down);
            c.step(Direction::Right);
        }
        assert_eq!((c.row, c.col), (2, 2));
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in bag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// A cell on the Tetris board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the color of the specified piece kind
pub type Cell = Option<PieceKind>;

/// One of the four orthogonal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step as (dx, dy), with y growing downward
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Grid position as (row, col)
pub type GridPos = (u8, u8);

/// Keyboard selection cursor for pointer-driven games
///
/// Games that are played by clicking cells keep one of these so the same
/// moves are reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: u8,
    pub col: u8,
    rows: u8,
    cols: u8,
}

impl Cursor {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            row: 0,
            col: 0,
            rows,
            cols,
        }
    }

    /// Move one cell, clamped to the grid
    pub fn step(&mut self, dir: Direction) {
        match dir {
            Direction::Up => self.row = self.row.saturating_sub(1),
            Direction::Down => self.row = (self.row + 1).min(self.rows.saturating_sub(1)),
            Direction::Left => self.col = self.col.saturating_sub(1),
            Direction::Right => self.col = (self.col + 1).min(self.cols.saturating_sub(1)),
        }
    }

    /// Jump to a cell (ignored when out of range)
    pub fn set(&mut self, pos: GridPos) {
        if pos.0 < self.rows && pos.1 < self.cols {
            self.row = pos.0;
            self.col = pos.1;
        }
    }

    pub fn pos(&self) -> GridPos {
        (self.row, self.col)
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard and pointer input. Each game
/// interprets the subset that makes sense for it and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Directional input: shift a piece, slide tiles, or steer the snake
    Move(Direction),
    /// Rotate the falling piece clockwise
    Rotate,
    /// Drop piece one cell down
    SoftDrop,
    /// Instantly drop piece to lowest valid position
    HardDrop,
    /// Move the selection cursor
    Cursor(Direction),
    /// Select the cell under the cursor (also starts games that wait for it)
    Activate,
    /// Select a specific cell (pointer click)
    Select(GridPos),
    /// Drag from one cell to another (pointer drag-and-drop)
    Drag { from: GridPos, to: GridPos },
    /// Enlarge the grid (next level)
    SizeUp,
    /// Shrink the grid (previous level)
    SizeDown,
    /// Increase game speed
    SpeedUp,
    /// Decrease game speed
    SpeedDown,
    /// Toggle highlighting of completed cells
    ToggleHighlight,
    /// Toggle pause state
    Pause,
    /// Restart the game
    Restart,
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the player to start
    Ready,
    Playing,
    Paused,
    /// Terminal state: the player solved or won the game
    Won,
    /// Terminal state: the player lost
    GameOver,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::GameOver)
    }
}

/// Every playable game (variants count as separate games)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    TetrisClassic,
    TetrisMarathon,
    Twenty48,
    ChainReaction,
    SlidingPuzzle,
    SwapPuzzle,
    Schulte,
    SnakeClassic,
    SnakeWrap,
}

impl GameKind {
    pub const ALL: [GameKind; 9] = [
        GameKind::TetrisClassic,
        GameKind::TetrisMarathon,
        GameKind::Twenty48,
        GameKind::ChainReaction,
        GameKind::SlidingPuzzle,
        GameKind::SwapPuzzle,
        GameKind::Schulte,
        GameKind::SnakeClassic,
        GameKind::SnakeWrap,
    ];

    /// Short identifier used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            GameKind::TetrisClassic => "tetris",
            GameKind::TetrisMarathon => "tetris-marathon",
            GameKind::Twenty48 => "2048",
            GameKind::ChainReaction => "chain-reaction",
            GameKind::SlidingPuzzle => "jigsaw",
            GameKind::SwapPuzzle => "jigsaw-swap",
            GameKind::Schulte => "schulte",
            GameKind::SnakeClassic => "snake",
            GameKind::SnakeWrap => "snake-wrap",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        GameKind::ALL.into_iter().find(|k| k.slug() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::TetrisClassic => "Tetris",
            GameKind::TetrisMarathon => "Tetris Marathon",
            GameKind::Twenty48 => "2048",
            GameKind::ChainReaction => "Chain Reaction",
            GameKind::SlidingPuzzle => "Sliding Jigsaw",
            GameKind::SwapPuzzle => "Swap Jigsaw",
            GameKind::Schulte => "Schulte Table",
            GameKind::SnakeClassic => "Snake",
            GameKind::SnakeWrap => "Snake Wrap",
        }
    }

    /// Fixed storage key of the persisted high score, for games that keep one
    pub fn highscore_key(&self) -> Option<&'static str> {
        match self {
            GameKind::TetrisClassic => Some("tetris-highscore"),
            GameKind::TetrisMarathon => Some("tetris-marathon-highscore"),
            GameKind::Twenty48 => Some("2048-bestScore"),
            GameKind::SnakeClassic => Some("snake-highscore"),
            GameKind::SnakeWrap => Some("snake-wrap-highscore"),
            GameKind::ChainReaction
            | GameKind::SlidingPuzzle
            | GameKind::SwapPuzzle
            | GameKind::Schulte => None,
        }
    }

    /// Whether the game is played by selecting cells (cursor or pointer)
    pub fn is_pointer_game(&self) -> bool {
        matches!(
            self,
            GameKind::ChainReaction
                | GameKind::SlidingPuzzle
                | GameKind::SwapPuzzle
                | GameKind::Schulte
        )
    }
}

/// Actions of the portal menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    /// Cycle the category filter
    NextCategory,
    /// Toggle the featured-only filter
    ToggleFeatured,
    /// Append a character to the search query
    Type(char),
    /// Remove the last character of the search query
    Backspace,
    /// Clear the search query
    ClearSearch,
    /// Launch the selected game
    Launch,
    Quit,
}
