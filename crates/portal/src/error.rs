//! Error types for the portal library

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;

/// Errors that can occur while loading or saving portal data
#[derive(Debug, Error)]
pub enum PortalError {
    /// Reading or writing a file failed
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog or high-score file is not valid JSON of the expected shape
    #[error("Invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog url that does not name a known game page
    #[error("Unknown game url: {0}")]
    UnknownGame(String),
}

impl PortalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            origin: origin.into(),
            source,
        }
    }
}
