//! Portal: the catalog browser in front of the games.
//!
//! - [`catalog`]: game records, filtering, url → game resolution
//! - [`menu`]: search/filter/selection state of the portal screen
//! - [`highscore`]: best scores persisted as JSON
//! - [`config`]: environment-driven settings
//!
//! Everything here is terminal-free; the `term` crate draws it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod highscore;
pub mod menu;

pub use minigames_types as types;

pub use catalog::{
    resolve_url, Catalog, CatalogFilter, GameRecord, BUILTIN_CATALOG, DEFAULT_CATEGORY,
};
pub use config::Config;
pub use error::{PortalError, Result};
pub use highscore::HighScores;
pub use menu::{MenuOutcome, PortalMenu};
