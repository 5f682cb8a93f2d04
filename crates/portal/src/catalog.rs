//! Game catalog: the records listed on the portal screen
//!
//! A catalog is a JSON array of records. One is built into the binary; a file
//! can replace it. Records are never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PortalError, Result};
use crate::types::GameKind;

/// Catalog shipped with the binary
pub const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Category of records that do not name one
pub const DEFAULT_CATEGORY: &str = "Other";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// One game card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Page of the game, e.g. `Snake/wrap.html`
    pub url: String,
    #[serde(default, alias = "imageUrl")]
    pub image: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl GameRecord {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn game_kind(&self) -> Result<GameKind> {
        resolve_url(&self.url)
    }
}

/// Map a catalog url to the game it launches
///
/// The directory picks the game and the page picks the variant; a missing
/// page means `index.html`. Query strings and fragments are ignored.
pub fn resolve_url(url: &str) -> Result<GameKind> {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches("./")
        .trim_start_matches('/');
    let (dir, page) = match path.split_once('/') {
        Some((dir, page)) => (dir, page.trim_end_matches('/')),
        None => (path, ""),
    };
    let page = if page.is_empty() { "index.html" } else { page };

    let kind = match (dir.to_ascii_lowercase().as_str(), page) {
        ("tetris", "index.html") => GameKind::TetrisClassic,
        ("tetris", "marathon.html") => GameKind::TetrisMarathon,
        ("2048", "index.html") => GameKind::Twenty48,
        ("chainreaction", "index.html") => GameKind::ChainReaction,
        ("jigsaw", "index.html") => GameKind::SlidingPuzzle,
        ("jigsaw", "swap.html") => GameKind::SwapPuzzle,
        ("schultetable", "index.html") => GameKind::Schulte,
        ("snake", "index.html") => GameKind::SnakeClassic,
        ("snake", "wrap.html") => GameKind::SnakeWrap,
        _ => return Err(PortalError::UnknownGame(url.to_string())),
    };
    Ok(kind)
}

/// What the portal screen narrows the list to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Case-insensitive substring of the title
    pub query: String,
    /// `None` shows every category
    pub category: Option<String>,
    pub featured_only: bool,
}

impl CatalogFilter {
    pub fn matches(&self, record: &GameRecord) -> bool {
        if self.featured_only && !record.is_featured() {
            return false;
        }
        if let Some(category) = &self.category {
            if !record.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        self.query.is_empty()
            || record
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    pub fn new(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records; `origin` names the source in errors
    pub fn from_json(text: &str, origin: &str) -> Result<Self> {
        let records: Vec<GameRecord> =
            serde_json::from_str(text).map_err(|e| PortalError::json(origin, e))?;
        Ok(Self { records })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PortalError::io(path, e))?;
        Self::from_json(&text, &path.display().to_string())
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Catalog for the portal screen
    ///
    /// Uses `path` when given, the built-in catalog otherwise. A catalog that
    /// cannot be read or parsed is logged and shows as an empty list.
    pub fn load(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        };
        match loaded {
            Ok(catalog) => {
                debug!(records = catalog.records.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                warn!(error = %e, "catalog unavailable, showing an empty list");
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in catalog order
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in &self.records {
            if !out.iter().any(|c| c.eq_ignore_ascii_case(&record.category)) {
                out.push(&record.category);
            }
        }
        out
    }

    /// Matching records, featured ones first, otherwise in catalog order
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&GameRecord> {
        let mut out: Vec<&GameRecord> = self.records.iter().filter(|r| filter.matches(r)).collect();
        out.sort_by_key(|r| !r.is_featured());
        out
    }
}
