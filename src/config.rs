//! Engine configuration.
//!
//! Covers the user-facing sorting preference: a default algorithm plus
//! per-space overrides. Loaded from a TOML file by the embedding
//! application and handed to [`RoomListStore`](crate::store::RoomListStore)
//! at construction.
//!
//! ```toml
//! [sorting]
//! default = "recency"
//!
//! [sorting.per_space]
//! "!work:example.org" = "alphabetic"
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::room::SpaceId;
use crate::sorters::SortingAlgorithm;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML or names unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Sorting preferences.
    #[serde(default)]
    pub sorting: SortingConfig,
}

/// Sorting preferences.
#[derive(Debug, Clone, Deserialize)]
pub struct SortingConfig {
    /// Algorithm for spaces without an override.
    #[serde(default = "default_algorithm")]
    pub default: SortingAlgorithm,

    /// Per-space overrides, keyed by space id.
    #[serde(default)]
    pub per_space: HashMap<String, SortingAlgorithm>,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            default: default_algorithm(),
            per_space: HashMap::new(),
        }
    }
}

fn default_algorithm() -> SortingAlgorithm {
    SortingAlgorithm::Recency
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl SortingConfig {
    /// Algorithm in effect for `space` (`None` means the unscoped list).
    pub fn for_space(&self, space: Option<&SpaceId>) -> SortingAlgorithm {
        space
            .and_then(|s| self.per_space.get(s.as_str()).copied())
            .unwrap_or(self.default)
    }
}
