//! Common surface of every game, and a launcher-friendly wrapper

use crate::chain::ChainReaction;
use crate::g2048::Twenty48;
use crate::jigsaw::{Jigsaw, PuzzleMode};
use crate::rng::RandomSource;
use crate::schulte::Schulte;
use crate::snake::{Snake, SnakeMode};
use crate::tetris::{Ruleset, Tetris};
use crate::types::{
    GameAction, GameKind, GameStatus, CHAIN_GRID, CHAIN_GRID_COMPACT, CHAIN_MIN_PLAYERS,
    JIGSAW_DEFAULT_SIZE, SCHULTE_DEFAULT_SIZE, SNAKE_DEFAULT_SPEED,
};

/// What the host loop needs from a game
pub trait Game {
    fn kind(&self) -> GameKind;

    /// Apply one input; false when it was rejected and nothing changed
    fn apply_action(&mut self, action: GameAction) -> bool;

    /// Advance timers by `elapsed_ms`
    fn tick(&mut self, elapsed_ms: u32);

    fn status(&self) -> GameStatus;

    /// Score that counts toward a high score, for games that keep one
    fn score(&self) -> Option<u32> {
        None
    }

    fn restart(&mut self);
}

impl<R: RandomSource> Game for Tetris<R> {
    fn kind(&self) -> GameKind {
        match self.ruleset() {
            Ruleset::Classic => GameKind::TetrisClassic,
            Ruleset::Marathon => GameKind::TetrisMarathon,
        }
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        Tetris::apply_action(self, action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        Tetris::tick(self, elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        Tetris::status(self)
    }

    fn score(&self) -> Option<u32> {
        Some(Tetris::score(self))
    }

    fn restart(&mut self) {
        Tetris::restart(self)
    }
}

impl<R: RandomSource> Game for Twenty48<R> {
    fn kind(&self) -> GameKind {
        GameKind::Twenty48
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        Twenty48::apply_action(self, action)
    }

    fn tick(&mut self, _elapsed_ms: u32) {}

    fn status(&self) -> GameStatus {
        Twenty48::status(self)
    }

    fn score(&self) -> Option<u32> {
        Some(Twenty48::score(self))
    }

    fn restart(&mut self) {
        Twenty48::restart(self)
    }
}

impl Game for ChainReaction {
    fn kind(&self) -> GameKind {
        GameKind::ChainReaction
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        ChainReaction::apply_action(self, action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        ChainReaction::tick(self, elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        ChainReaction::status(self)
    }

    fn restart(&mut self) {
        ChainReaction::restart(self)
    }
}

impl<R: RandomSource> Game for Jigsaw<R> {
    fn kind(&self) -> GameKind {
        match self.mode() {
            PuzzleMode::Sliding => GameKind::SlidingPuzzle,
            PuzzleMode::Swap => GameKind::SwapPuzzle,
        }
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        Jigsaw::apply_action(self, action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        Jigsaw::tick(self, elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        Jigsaw::status(self)
    }

    fn restart(&mut self) {
        Jigsaw::restart(self)
    }
}

impl<R: RandomSource> Game for Schulte<R> {
    fn kind(&self) -> GameKind {
        GameKind::Schulte
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        Schulte::apply_action(self, action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        Schulte::tick(self, elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        Schulte::status(self)
    }

    fn restart(&mut self) {
        Schulte::restart(self)
    }
}

impl<R: RandomSource> Game for Snake<R> {
    fn kind(&self) -> GameKind {
        match self.mode() {
            SnakeMode::Classic => GameKind::SnakeClassic,
            SnakeMode::Wrap => GameKind::SnakeWrap,
        }
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        Snake::apply_action(self, action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        Snake::tick(self, elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        Snake::status(self)
    }

    fn score(&self) -> Option<u32> {
        Some(Snake::score(self))
    }

    fn restart(&mut self) {
        Snake::restart(self)
    }
}

/// Settings chosen before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    pub seed: u32,
    /// Chain Reaction player count
    pub players: u8,
    /// Grid size for the puzzles; `None` picks each game's default
    pub size: Option<u8>,
    /// Snake steps per second
    pub speed: Option<u32>,
    /// Smaller Chain Reaction board for narrow terminals
    pub compact: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            players: CHAIN_MIN_PLAYERS,
            size: None,
            speed: None,
            compact: false,
        }
    }
}

/// Any one game, as launched from the portal or the command line
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Tetris(Tetris),
    Twenty48(Twenty48),
    Chain(ChainReaction),
    Jigsaw(Jigsaw),
    Schulte(Schulte),
    Snake(Snake),
}

impl ActiveGame {
    pub fn new(kind: GameKind, options: &GameOptions) -> Self {
        let seed = options.seed;
        match kind {
            GameKind::TetrisClassic => Self::Tetris(Tetris::new(Ruleset::Classic, seed)),
            GameKind::TetrisMarathon => Self::Tetris(Tetris::new(Ruleset::Marathon, seed)),
            GameKind::Twenty48 => Self::Twenty48(Twenty48::new(seed)),
            GameKind::ChainReaction => {
                let size = if options.compact {
                    CHAIN_GRID_COMPACT
                } else {
                    CHAIN_GRID
                };
                Self::Chain(ChainReaction::new(size, options.players))
            }
            GameKind::SlidingPuzzle | GameKind::SwapPuzzle => {
                let mode = if kind == GameKind::SwapPuzzle {
                    PuzzleMode::Swap
                } else {
                    PuzzleMode::Sliding
                };
                let size = options.size.unwrap_or(JIGSAW_DEFAULT_SIZE);
                Self::Jigsaw(Jigsaw::new(mode, size, seed))
            }
            GameKind::Schulte => {
                Self::Schulte(Schulte::new(options.size.unwrap_or(SCHULTE_DEFAULT_SIZE), seed))
            }
            GameKind::SnakeClassic | GameKind::SnakeWrap => {
                let mode = if kind == GameKind::SnakeWrap {
                    SnakeMode::Wrap
                } else {
                    SnakeMode::Classic
                };
                let mut snake = Snake::new(mode, seed);
                snake.set_speed(options.speed.unwrap_or(SNAKE_DEFAULT_SPEED));
                Self::Snake(snake)
            }
        }
    }

    pub fn as_game(&self) -> &dyn Game {
        match self {
            Self::Tetris(g) => g,
            Self::Twenty48(g) => g,
            Self::Chain(g) => g,
            Self::Jigsaw(g) => g,
            Self::Schulte(g) => g,
            Self::Snake(g) => g,
        }
    }

    pub fn as_game_mut(&mut self) -> &mut dyn Game {
        match self {
            Self::Tetris(g) => g,
            Self::Twenty48(g) => g,
            Self::Chain(g) => g,
            Self::Jigsaw(g) => g,
            Self::Schulte(g) => g,
            Self::Snake(g) => g,
        }
    }
}

impl Game for ActiveGame {
    fn kind(&self) -> GameKind {
        self.as_game().kind()
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        self.as_game_mut().apply_action(action)
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.as_game_mut().tick(elapsed_ms)
    }

    fn status(&self) -> GameStatus {
        self.as_game().status()
    }

    fn score(&self) -> Option<u32> {
        self.as_game().score()
    }

    fn restart(&mut self) {
        self.as_game_mut().restart()
    }
}
