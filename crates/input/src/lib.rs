//! Terminal input module (game-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] per game, key events on the portal
//! screen into [`crate::types::MenuAction`], and mouse press/drag/release
//! sequences into click and drag [`Gesture`]s.

pub mod gesture;
pub mod map;

pub use minigames_types as types;

pub use gesture::{Gesture, GestureTracker, ScreenPos};
pub use map::{is_back, map_key, map_menu_key, should_quit};
