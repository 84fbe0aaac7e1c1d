//! Action vocabulary for authored choreography
//!
//! Every step in a sequence names an action. Known actions live in a static
//! table carrying the metadata the parser and the step dispatcher need:
//! whether the action aims at a target, and how a lone numeric field after
//! the action name is read. Names the table does not know become
//! `ActionKind::Unknown` and flow through the engine as timed no-ops.

use std::fmt;

use phf::phf_map;

/// How a single numeric field following an action name is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoneNumeric {
    /// The number is the wait before the action fires (e.g. a charge-up).
    Delay,
    /// The number is the action's argument (angle, count, intensity).
    Arg,
}

/// One verb of boss choreography.
///
/// The engine never interprets what an action *looks like*; it only routes
/// the step to the host's `on_step` callback. `Unknown` keeps the authored
/// name for diagnostics and is dispatched to nobody.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    Shoot,
    Beam,
    BiggerBeam,
    Volley,
    Charge,
    Slam,
    Spin,
    Summon,
    Teleport,
    Roar,
    Scream,
    Collapse,
    Wait,
    /// Name not present in the action table.
    Unknown(String),
}

static ACTIONS: phf::Map<&'static str, ActionKind> = phf_map! {
    "shoot" => ActionKind::Shoot,
    "beam" => ActionKind::Beam,
    "biggerbeam" => ActionKind::BiggerBeam,
    "volley" => ActionKind::Volley,
    "charge" => ActionKind::Charge,
    "slam" => ActionKind::Slam,
    "spin" => ActionKind::Spin,
    "summon" => ActionKind::Summon,
    "teleport" => ActionKind::Teleport,
    "roar" => ActionKind::Roar,
    "scream" => ActionKind::Scream,
    "collapse" => ActionKind::Collapse,
    "wait" => ActionKind::Wait,
};

impl ActionKind {
    /// Resolve an authored name against the action table.
    ///
    /// Matching is case-insensitive. Unmatched names come back as
    /// `Unknown` with the lowercased name preserved.
    pub fn resolve(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match ACTIONS.get(lower.as_str()) {
            Some(kind) => kind.clone(),
            None => ActionKind::Unknown(lower),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ActionKind::Unknown(_))
    }

    /// Whether this action fires at a target.
    ///
    /// Aiming steps are skipped for the tick when the world has no target.
    pub const fn aims(&self) -> bool {
        matches!(
            self,
            ActionKind::Shoot
                | ActionKind::Beam
                | ActionKind::BiggerBeam
                | ActionKind::Volley
                | ActionKind::Charge
                | ActionKind::Teleport
        )
    }

    /// How a lone numeric field after this action's name is read.
    ///
    /// Fire-style actions take only a charge delay, so their single number
    /// is a delay; everything else (and unknown names) reads it as the
    /// argument.
    pub const fn lone_numeric(&self) -> LoneNumeric {
        match self {
            ActionKind::Shoot
            | ActionKind::Beam
            | ActionKind::BiggerBeam
            | ActionKind::Teleport
            | ActionKind::Roar
            | ActionKind::Scream
            | ActionKind::Collapse
            | ActionKind::Wait => LoneNumeric::Delay,
            ActionKind::Volley
            | ActionKind::Charge
            | ActionKind::Slam
            | ActionKind::Spin
            | ActionKind::Summon
            | ActionKind::Unknown(_) => LoneNumeric::Arg,
        }
    }

    /// The table name for known actions, the authored name for unknown.
    pub fn name(&self) -> &str {
        match self {
            ActionKind::Shoot => "shoot",
            ActionKind::Beam => "beam",
            ActionKind::BiggerBeam => "biggerbeam",
            ActionKind::Volley => "volley",
            ActionKind::Charge => "charge",
            ActionKind::Slam => "slam",
            ActionKind::Spin => "spin",
            ActionKind::Summon => "summon",
            ActionKind::Teleport => "teleport",
            ActionKind::Roar => "roar",
            ActionKind::Scream => "scream",
            ActionKind::Collapse => "collapse",
            ActionKind::Wait => "wait",
            ActionKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_action() {
        assert_eq!(ActionKind::resolve("shoot"), ActionKind::Shoot);
        assert_eq!(ActionKind::resolve("biggerbeam"), ActionKind::BiggerBeam);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(ActionKind::resolve("SHOOT"), ActionKind::Shoot);
        assert_eq!(ActionKind::resolve("BiggerBeam"), ActionKind::BiggerBeam);
    }

    #[test]
    fn test_resolve_unknown_keeps_name() {
        let kind = ActionKind::resolve("Firestorm");
        assert_eq!(kind, ActionKind::Unknown("firestorm".to_string()));
        assert!(!kind.is_known());
        assert_eq!(kind.name(), "firestorm");
    }

    #[test]
    fn test_fire_style_lone_numeric_is_delay() {
        assert_eq!(ActionKind::Shoot.lone_numeric(), LoneNumeric::Delay);
        assert_eq!(ActionKind::Beam.lone_numeric(), LoneNumeric::Delay);
    }

    #[test]
    fn test_parameterized_lone_numeric_is_arg() {
        assert_eq!(ActionKind::Volley.lone_numeric(), LoneNumeric::Arg);
        assert_eq!(
            ActionKind::Unknown("x".to_string()).lone_numeric(),
            LoneNumeric::Arg
        );
    }

    #[test]
    fn test_aiming_actions() {
        assert!(ActionKind::Shoot.aims());
        assert!(ActionKind::Teleport.aims());
        assert!(!ActionKind::Roar.aims());
        assert!(!ActionKind::Wait.aims());
        assert!(!ActionKind::Unknown("x".to_string()).aims());
    }
}
