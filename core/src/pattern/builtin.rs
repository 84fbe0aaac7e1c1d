//! Built-in attack patterns
//!
//! Hand-authored sequences addressable by id from boss definitions.
//! All of these loop; a phase keeps its pattern running until something
//! interrupts it (damage, a phase transition, or an explicit swap).
//!
//! Id 10 is reserved as the passive pattern: an empty looping sequence
//! that keeps the boss attacking-but-idle on purpose (used for staged
//! lulls between pressure phases).

use crate::pattern::PatternId;
use crate::script::ActionKind;
use crate::sequence::{AttackSequence, AttackStep};

/// Id of the intentionally empty passive pattern.
pub const PASSIVE: PatternId = PatternId(10);

fn step(action: ActionKind, delay_secs: f32, arg: f32) -> AttackStep {
    AttackStep::new(action, delay_secs, arg)
}

/// Steady single shots.
pub fn opening_volley() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Shoot, 0.4, 0.0),
        step(ActionKind::Shoot, 0.4, 0.0),
        step(ActionKind::Shoot, 0.4, 0.0),
        step(ActionKind::Wait, 0.8, 0.0),
    ])
}

/// Alternating beams sweeping opposite angles.
pub fn sweeping_beams() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Beam, 0.8, 45.0),
        step(ActionKind::Beam, 0.8, 135.0),
    ])
}

/// Shots interleaved with spread volleys and a ground slam.
pub fn pressure_mix() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Shoot, 0.3, 0.0),
        step(ActionKind::Volley, 0.6, 5.0),
        step(ActionKind::Slam, 1.2, 0.0),
    ])
}

/// Periodic adds with a breather between waves.
pub fn summoner() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Summon, 2.5, 2.0),
        step(ActionKind::Wait, 1.0, 0.0),
    ])
}

/// Rushdown: charge in, spin out.
pub fn blade_dance() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Charge, 0.9, 0.0),
        step(ActionKind::Spin, 0.4, 2.0),
        step(ActionKind::Spin, 0.4, 2.0),
        step(ActionKind::Wait, 1.2, 0.0),
    ])
}

/// Slow heavy beams with long telegraphs.
pub fn artillery() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::BiggerBeam, 2.0, 0.0),
        step(ActionKind::Wait, 1.5, 0.0),
    ])
}

/// Blink near the target and snipe twice.
pub fn teleport_harass() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Teleport, 0.5, 0.0),
        step(ActionKind::Shoot, 0.2, 0.0),
        step(ActionKind::Shoot, 0.2, 0.0),
        step(ActionKind::Wait, 0.9, 0.0),
    ])
}

/// Area denial around the boss.
pub fn fortress() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Slam, 1.0, 0.0),
        step(ActionKind::Volley, 0.5, 8.0),
        step(ActionKind::Wait, 1.0, 0.0),
    ])
}

/// Zero-delay burst fire. The burst resolves within a single tick, then
/// the pattern rests.
pub fn frenzy() -> AttackSequence {
    AttackSequence::looped(vec![
        step(ActionKind::Shoot, 0.0, 0.0),
        step(ActionKind::Shoot, 0.0, 0.0),
        step(ActionKind::Shoot, 0.0, 0.0),
        step(ActionKind::Shoot, 0.0, 0.0),
        step(ActionKind::Wait, 0.8, 0.0),
    ])
}

/// The passive pattern: attacking state, no attacks.
pub fn passive() -> AttackSequence {
    AttackSequence::looped(Vec::new())
}

/// Fallback handed out for unknown pattern ids: a slow idle loop.
pub fn idle_fallback() -> AttackSequence {
    AttackSequence::looped(vec![step(ActionKind::Wait, 0.5, 0.0)])
}

/// The full built-in table, in id order.
pub fn all() -> Vec<(PatternId, AttackSequence)> {
    vec![
        (PatternId(1), opening_volley()),
        (PatternId(2), sweeping_beams()),
        (PatternId(3), pressure_mix()),
        (PatternId(4), summoner()),
        (PatternId(5), blade_dance()),
        (PatternId(6), artillery()),
        (PatternId(7), teleport_harass()),
        (PatternId(8), fortress()),
        (PatternId(9), frenzy()),
        (PASSIVE, passive()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_is_empty_and_loops() {
        let seq = passive();
        assert!(seq.is_empty());
        assert!(seq.looping);
    }

    #[test]
    fn test_all_builtin_patterns_loop() {
        for (id, seq) in all() {
            assert!(seq.looping, "pattern {} must loop", id.0);
        }
    }

    #[test]
    fn test_frenzy_burst_is_zero_delay() {
        let seq = frenzy();
        assert!(seq.steps[..4]
            .iter()
            .all(|s| s.delay_secs.abs() < f32::EPSILON));
    }
}
