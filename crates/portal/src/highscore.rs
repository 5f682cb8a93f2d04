//! Best scores, one integer per game key, kept in a small JSON file
//!
//! ```json
//! { "2048-bestScore": 1024, "snake-highscore": 37 }
//! ```
//!
//! Storage problems never stop a game: a missing file means every score is
//! zero, a broken file is logged and ignored, and a failed write is logged.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{PortalError, Result};

#[derive(Debug, Clone, Default)]
pub struct HighScores {
    /// `None` keeps scores in memory only
    path: Option<PathBuf>,
    scores: BTreeMap<String, u32>,
}

impl HighScores {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Read scores from `path`, starting empty if that fails
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = match read_scores(&path) {
            Ok(scores) => {
                debug!(path = %path.display(), entries = scores.len(), "high scores loaded");
                scores
            }
            Err(PortalError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                BTreeMap::new()
            }
            Err(e) => {
                warn!(error = %e, "ignoring unreadable high-score file");
                BTreeMap::new()
            }
        };
        Self {
            path: Some(path),
            scores,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> u32 {
        self.scores.get(key).copied().unwrap_or(0)
    }

    /// Keep `score` if it beats the stored one; true when it did
    ///
    /// A new best is written straight away; a failed write is only logged.
    pub fn record(&mut self, key: &str, score: u32) -> bool {
        if score <= self.get(key) {
            return false;
        }
        self.scores.insert(key.to_string(), score);
        info!(key, score, "new high score");
        if let Err(e) = self.save() {
            warn!(error = %e, "could not save high scores");
        }
        true
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| PortalError::io(dir, e))?;
        }
        let text = serde_json::to_string_pretty(&self.scores)
            .map_err(|e| PortalError::json(path.display().to_string(), e))?;
        std::fs::write(path, text).map_err(|e| PortalError::io(path, e))
    }
}

/// Parse the score file, accepting numbers or numeric strings as values
fn read_scores(path: &Path) -> Result<BTreeMap<String, u32>> {
    let text = std::fs::read_to_string(path).map_err(|e| PortalError::io(path, e))?;
    let raw: BTreeMap<String, Value> = serde_json::from_str(&text)
        .map_err(|e| PortalError::json(path.display().to_string(), e))?;

    let mut scores = BTreeMap::new();
    for (key, value) in raw {
        let score = match &value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        };
        match score.and_then(|s| u32::try_from(s).ok()) {
            Some(score) => {
                scores.insert(key, score);
            }
            None => warn!(key = %key, %value, "skipping invalid high-score entry"),
        }
    }
    Ok(scores)
}
