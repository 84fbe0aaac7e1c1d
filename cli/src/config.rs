//! Console configuration, persisted with confy

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Directory holding boss definition TOML files
    pub definitions_dir: String,

    /// Simulated seconds per tick; `run` advances in this granularity
    #[serde(default = "default_tick")]
    pub tick_secs: f32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            definitions_dir: default_definitions_dir(),
            tick_secs: default_tick(),
        }
    }
}

fn default_tick() -> f32 {
    0.05
}

fn default_definitions_dir() -> String {
    dirs::config_dir()
        .map(|dir| dir.join("tyrant").join("definitions"))
        .unwrap_or_else(|| PathBuf::from("definitions"))
        .to_string_lossy()
        .into_owned()
}

impl CliConfig {
    pub fn load() -> Self {
        confy::load("tyrant", None).unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(e) = confy::store("tyrant", None, self) {
            tracing::warn!(error = %e, "failed to save configuration");
        }
    }
}
