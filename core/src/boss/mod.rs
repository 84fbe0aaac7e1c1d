//! Boss definition system
//!
//! This module owns the data-driven side of the engine:
//! - **definition**: serde types for `[[boss]]` TOML tables
//! - **loader**: pack loading, id merging, validation/normalization
//! - **watcher**: hot reload of pack directories
//! - **error**: the filesystem/TOML error surface
//!
//! Runtime behavior (states, scheduling, health) lives in `encounter`;
//! everything here is inert data until an encounter is spawned from it.

mod definition;
mod error;
mod loader;
mod watcher;

pub use definition::*;
pub use error::BossError;
pub use loader::{load_definition_file, load_definitions, parse_definitions};
pub use watcher::{DefinitionEvent, DefinitionWatcher};
