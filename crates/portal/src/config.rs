//! Runtime configuration read from the environment

use std::path::PathBuf;

/// File name of the high-score store inside the data directory
pub const HIGHSCORE_FILE: &str = "highscores.json";

/// Where the arcade keeps its files and which seed it plays with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `highscores.json`
    pub data_dir: PathBuf,
    /// Catalog file replacing the built-in one
    pub catalog_path: Option<PathBuf>,
    /// Log file; without one nothing is logged
    pub log_path: Option<PathBuf>,
    /// Fixed seed for every game; random per launch when unset
    pub seed: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(std::env::var("HOME").ok()),
            catalog_path: None,
            log_path: None,
            seed: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    ///
    /// `MINIGAMES_DATA_DIR`, `MINIGAMES_CATALOG`, `MINIGAMES_LOG` and
    /// `MINIGAMES_SEED`; unset, empty or unparsable values fall back to the
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let data_dir = non_empty("MINIGAMES_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_data_dir(lookup("HOME")));
        let catalog_path = non_empty("MINIGAMES_CATALOG").map(PathBuf::from);
        let log_path = non_empty("MINIGAMES_LOG").map(PathBuf::from);
        let seed = non_empty("MINIGAMES_SEED").and_then(|s| s.parse().ok());

        Self {
            data_dir,
            catalog_path,
            log_path,
            seed,
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn highscore_path(&self) -> PathBuf {
        self.data_dir.join(HIGHSCORE_FILE)
    }
}

fn default_data_dir(home: Option<String>) -> PathBuf {
    match home.filter(|h| !h.trim().is_empty()) {
        Some(home) => PathBuf::from(home).join(".minigames"),
        None => PathBuf::from(".minigames"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_from_env() {
        // This test just ensures it doesn't panic
        let _config = Config::from_env();
    }

    #[test]
    fn defaults_live_under_home() {
        let config = Config::from_lookup(lookup(&[("HOME", "/home/ada")]));
        assert_eq!(config.data_dir, PathBuf::from("/home/ada/.minigames"));
        assert_eq!(
            config.highscore_path(),
            PathBuf::from("/home/ada/.minigames/highscores.json")
        );
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.seed, None);

        let homeless = Config::from_lookup(lookup(&[]));
        assert_eq!(homeless.data_dir, PathBuf::from(".minigames"));
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("HOME", "/home/ada"),
            ("MINIGAMES_DATA_DIR", "/tmp/games"),
            ("MINIGAMES_CATALOG", "games.json"),
            ("MINIGAMES_LOG", " /tmp/games.log "),
            ("MINIGAMES_SEED", "42"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/games"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("games.json")));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/games.log")));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn bad_values_are_ignored() {
        let config = Config::from_lookup(lookup(&[
            ("MINIGAMES_SEED", "lots"),
            ("MINIGAMES_LOG", "   "),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_path, None);
    }
}
