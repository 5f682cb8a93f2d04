//! Minigames (workspace facade crate).
//!
//! The games, input mapping, portal and terminal views live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `minigames::{core,input,portal,term,types}` and adds the small amount of
//! glue the binary needs in [`host`].

pub mod host;

pub use minigames_core as core;
pub use minigames_input as input;
pub use minigames_portal as portal;
pub use minigames_term as term;
pub use minigames_types as types;
