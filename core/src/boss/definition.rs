//! Boss definition types
//!
//! Definitions are loaded from TOML files and describe everything a boss
//! needs at spawn: health, phases with their pattern sets, one-shot
//! threshold events, and the optional authored scripts.

use serde::{Deserialize, Serialize};

use crate::pattern::PatternId;

// ═══════════════════════════════════════════════════════════════════════════
// Root Config Structure
// ═══════════════════════════════════════════════════════════════════════════

/// Root structure for definition files (TOML).
/// A file can contain one or more boss definitions:
///
/// ```toml
/// [[boss]]
/// id = "warden"
/// name = "The Warden"
/// max_health = 1200
///
///   [[boss.phase]]
///   name = "Opening"
///   health_fraction = 1.0
///   patterns = [1, 2]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BossConfig {
    /// Boss definitions in this file
    #[serde(default, rename = "boss")]
    pub bosses: Vec<BossDefinition>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Boss Definition
// ═══════════════════════════════════════════════════════════════════════════

/// Everything the engine needs to spawn one boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BossDefinition {
    /// Stable identifier, unique within a pack (e.g. "warden")
    pub id: String,

    /// Display name
    pub name: String,

    /// Hit points at spawn
    #[serde(alias = "health")]
    pub max_health: u32,

    /// Seconds the boss stays staggered after a hit lands
    #[serde(default = "default_hurt_recovery")]
    pub hurt_recovery_secs: f32,

    /// Minimum seconds between regeneration uses
    #[serde(default = "default_regen_cooldown")]
    pub regen_cooldown_secs: f32,

    /// Script played once when the boss is defeated (farewell choreography)
    #[serde(default)]
    pub defeat_script: Option<String>,

    /// Health-gated phases, authored in any order; the loader sorts them
    /// by descending threshold
    #[serde(default, rename = "phase")]
    pub phases: Vec<PhaseDefinition>,

    /// One-shot threshold events (dialog cues, arena changes)
    #[serde(default, rename = "event")]
    pub events: Vec<ThresholdEventDefinition>,
}

impl BossDefinition {
    /// Phases whose threshold the given health fraction has reached.
    /// Assumes phases are sorted by descending threshold (loader output).
    pub fn deepest_phase_at(&self, fraction: f32) -> usize {
        self.phases
            .iter()
            .rposition(|p| fraction <= p.health_fraction)
            .unwrap_or(0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Phase Definition
// ═══════════════════════════════════════════════════════════════════════════

/// One health-gated stage of the encounter.
///
/// The phase becomes current once health falls to or below
/// `health_fraction`. Choreography comes from `script` when present and
/// non-empty, otherwise from the pattern set, cycled round-robin on each
/// re-entry into attacking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseDefinition {
    /// Display name (e.g. "Opening", "Desperation")
    pub name: String,

    /// Health fraction (0..=1) at or below which this phase is active
    pub health_fraction: f32,

    /// Built-in pattern ids this phase cycles through
    #[serde(default)]
    pub patterns: Vec<PatternId>,

    /// Authored script; overrides the pattern set when non-empty
    #[serde(default)]
    pub script: Option<String>,

    /// Script played once while transitioning into this phase
    #[serde(default)]
    pub transition_script: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Threshold Events
// ═══════════════════════════════════════════════════════════════════════════

/// A one-shot event fired the first time health falls to or below the
/// threshold. Distinct from phases: an event does not change choreography,
/// it only notifies the host (dialog, arena dressing, enrage cues).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdEventDefinition {
    /// Stable id, also the one-shot flag key (e.g. "halfway_taunt")
    pub id: String,

    /// Health fraction (0..=1) that triggers the event
    pub health_fraction: f32,
}

fn default_hurt_recovery() -> f32 {
    0.6
}

fn default_regen_cooldown() -> f32 {
    1.0
}
