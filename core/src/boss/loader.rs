//! Definition pack loading
//!
//! A pack is a flat directory of `.toml` files, each holding one or more
//! `[[boss]]` tables. Files are read in name order and merged by boss id,
//! so a later file can override a boss shipped by an earlier one (packs
//! layering a `99-custom.toml` over stock content rely on this).
//!
//! Loading validates and normalizes every definition: thresholds must be
//! in range, phases are sorted by descending threshold, and a start phase
//! at full health is synthesized when the author left it out.

use std::fs;
use std::path::{Path, PathBuf};

use super::{BossConfig, BossDefinition, BossError, PhaseDefinition};

/// Load every definition in a pack directory (non-recursive).
///
/// A missing directory loads as an empty pack. Bosses are returned sorted
/// by id.
pub fn load_definitions(dir: &Path) -> Result<Vec<BossDefinition>, BossError> {
    if !dir.exists() {
        tracing::info!(dir = %dir.display(), "definition directory missing, loading empty pack");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(dir).map_err(|source| BossError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    // Name order makes the override layering deterministic
    paths.sort();

    let mut bosses: Vec<BossDefinition> = Vec::new();
    for path in &paths {
        let loaded = load_definition_file(path)?;
        merge_definitions(&mut bosses, loaded);
    }

    bosses.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::info!(
        dir = %dir.display(),
        files = paths.len(),
        bosses = bosses.len(),
        "loaded definition pack"
    );
    Ok(bosses)
}

/// Load the definitions in a single TOML file.
pub fn load_definition_file(path: &Path) -> Result<Vec<BossDefinition>, BossError> {
    let content = fs::read_to_string(path).map_err(|source| BossError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_definitions(&content, path)
}

/// Parse and validate definition file content.
pub fn parse_definitions(content: &str, path: &Path) -> Result<Vec<BossDefinition>, BossError> {
    let config: BossConfig = toml::from_str(content).map_err(|source| BossError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bosses = config.bosses;
    for boss in &mut bosses {
        normalize_boss(boss, path)?;
    }
    Ok(bosses)
}

/// Merge newly loaded bosses into the accumulated list by id.
/// A repeated id replaces the earlier definition wholesale.
fn merge_definitions(bosses: &mut Vec<BossDefinition>, loaded: Vec<BossDefinition>) {
    for boss in loaded {
        if let Some(existing) = bosses.iter_mut().find(|b| b.id == boss.id) {
            tracing::debug!(id = %boss.id, "definition overridden by later file");
            *existing = boss;
        } else {
            bosses.push(boss);
        }
    }
}

fn normalize_boss(boss: &mut BossDefinition, path: &Path) -> Result<(), BossError> {
    let invalid = |reason: String| BossError::InvalidDefinition {
        path: path.to_path_buf(),
        reason,
    };

    if boss.id.is_empty() {
        return Err(invalid("boss id must not be empty".to_string()));
    }
    if boss.max_health == 0 {
        return Err(invalid(format!("boss '{}': max_health must be at least 1", boss.id)));
    }
    if boss.phases.is_empty() {
        return Err(invalid(format!("boss '{}': at least one phase is required", boss.id)));
    }

    for phase in &boss.phases {
        if !(0.0..=1.0).contains(&phase.health_fraction) {
            return Err(invalid(format!(
                "boss '{}': phase '{}' health_fraction {} outside 0..=1",
                boss.id, phase.name, phase.health_fraction
            )));
        }
    }
    for event in &boss.events {
        if !(0.0..=1.0).contains(&event.health_fraction) {
            return Err(invalid(format!(
                "boss '{}': event '{}' health_fraction {} outside 0..=1",
                boss.id, event.id, event.health_fraction
            )));
        }
    }

    // Deepest phase last; ties keep authored order
    boss.phases
        .sort_by(|a, b| b.health_fraction.total_cmp(&a.health_fraction));

    // The encounter always starts in a full-health phase
    if boss.phases[0].health_fraction < 1.0 {
        tracing::debug!(id = %boss.id, "no start phase at full health, synthesizing one");
        boss.phases.insert(
            0,
            PhaseDefinition {
                name: "Start".to_string(),
                health_fraction: 1.0,
                patterns: Vec::new(),
                script: None,
                transition_script: None,
            },
        );
    }

    // Events fire in descending-threshold order on a multi-cross hit
    boss.events
        .sort_by(|a, b| b.health_fraction.total_cmp(&a.health_fraction));

    Ok(())
}
