//! Error types for definition loading and watching

use std::path::PathBuf;
use thiserror::Error;

/// Errors at the definition-pack edge of the engine.
///
/// Runtime choreography never errors (bad input degrades to no-ops);
/// these cover the filesystem and TOML boundary only.
#[derive(Debug, Error)]
pub enum BossError {
    #[error("failed to read definition file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read definition directory {path}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse definition TOML in {path}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid boss definition in {path}: {reason}")]
    InvalidDefinition { path: PathBuf, reason: String },

    #[error("failed to watch definition directory {path}")]
    WatchDirectory {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}
