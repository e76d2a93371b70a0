//! Unified error handling for the room-list engine.
//!
//! The engine's own failure surface is deliberately small: filters and
//! sorters are total over well-formed rooms and never error, so what
//! remains is closed-set key parsing and configuration loading.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the room-list engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A filter key outside the closed set (only reachable through string
    /// parsing; the `FilterKey` enum itself is exhaustive).
    #[error("unknown filter key: {0}")]
    UnknownFilterKey(String),

    /// A sorting algorithm outside the closed set.
    #[error("unknown sorting algorithm: {0}")]
    UnknownSortingAlgorithm(String),

    /// Configuration could not be loaded or parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
