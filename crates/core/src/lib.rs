//! Core game logic - pure, deterministic, and testable
//!
//! Every game is a plain state struct with transition methods. Nothing here
//! touches the terminal, the file system or the clock:
//!
//! - **Deterministic**: all randomness comes from an injected [`RandomSource`]
//!   so the same seed replays the same game
//! - **Headless**: timers advance only through `tick(elapsed_ms)`
//! - **Forgiving**: an invalid move is rejected (returns `false`) and leaves
//!   the state untouched
//!
//! # Module Structure
//!
//! - [`tetris`]: board, tetrominoes, Classic and Marathon rulesets
//! - [`g2048`]: sliding number tiles
//! - [`chain`]: Chain Reaction with breadth-first explosion propagation
//! - [`jigsaw`]: sliding and swap picture puzzles
//! - [`schulte`]: number search table
//! - [`snake`]: classic and wrap-around snake
//! - [`game`]: the [`Game`] trait and [`ActiveGame`] wrapper used by hosts
//! - [`rng`]: seedable randomness and the 7-bag piece generator
//!
//! # Example
//!
//! ```
//! use minigames_core::{Ruleset, Tetris};
//! use minigames_types::GameAction;
//!
//! let mut game = Tetris::new(Ruleset::Marathon, 12345);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Hosts call `tick` every frame (16 ms) with the elapsed time. Tetris gravity,
//! snake steps, reaction replays and puzzle timers all run off these ticks.

pub mod chain;
pub mod g2048;
pub mod game;
pub mod jigsaw;
pub mod rng;
pub mod schulte;
pub mod snake;
pub mod tetris;

pub use minigames_types as types;

// Re-export commonly used types for convenience
pub use chain::ChainReaction;
pub use g2048::Twenty48;
pub use game::{ActiveGame, Game, GameOptions};
pub use jigsaw::{Jigsaw, PuzzleMode};
pub use rng::{PieceBag, RandomSource, Sequence, SimpleRng};
pub use schulte::Schulte;
pub use snake::{Snake, SnakeMode};
pub use tetris::{Board, DropOutcome, Ruleset, Tetris};
