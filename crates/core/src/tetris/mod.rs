//! Tetris: a 10x20 board, matrix-rotated tetrominoes, two rulesets

pub mod board;
pub mod game;
pub mod piece;
pub mod scoring;

pub use board::Board;
pub use game::{DropOutcome, Ruleset, Tetris};
pub use piece::{ActivePiece, Shape};
