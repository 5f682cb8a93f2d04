//! Terminal rendering for the games and the portal.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer, and the renderer flushes only what changed since the last
//! frame. Nothing here reads input or owns a game loop.
//!
//! - [`fb`]: styled character framebuffer
//! - [`layout`]: grid placement and mouse hit-testing
//! - [`views`]: one [`View`] per game plus the shared [`GameView`] screen
//! - [`portal_view`]: the catalog browser
//! - [`renderer`]: crossterm output with diffing and mouse capture

pub mod fb;
pub mod layout;
pub mod palette;
pub mod portal_view;
pub mod renderer;
pub mod views;

pub use minigames_core as core;
pub use minigames_portal as portal;
pub use minigames_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use layout::{GridLayout, Viewport};
pub use portal_view::PortalView;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use views::{view_of, GameView, GridSpec, Hud, Panel, View};
