//! Parser for the designer-facing sequencing script
//!
//! Scripts are plain text: tokens separated by commas, semicolons, or
//! newlines, each token whitespace-split into `action [numberA] [numberB]`.
//!
//! Field resolution:
//! 1. one field → `arg = 0`, `delay = 0.3`
//! 2. two fields → the number is a delay or the arg, per the action's
//!    lone-numeric convention (see `ActionKind::lone_numeric`)
//! 3. three or more fields → second is `arg`, third is `delay`
//!
//! Parsing never fails. A field that does not parse as a number falls back
//! to its default, a blank token is skipped, and an unrecognized action
//! name becomes a timed no-op step. Designers get diagnostics through
//! `tracing`, not errors.

use crate::script::{ActionKind, LoneNumeric};
use crate::sequence::{AttackSequence, AttackStep};

/// Wait applied to steps whose author gave no delay.
pub const DEFAULT_STEP_DELAY_SECS: f32 = 0.3;

/// Parse a script into its step list.
///
/// An empty or whitespace-only script yields an empty list; the caller
/// decides what that means (the encounter falls back to the active
/// phase's pattern set). No defaults are substituted here.
pub fn parse_script(source: &str) -> Vec<AttackStep> {
    let mut steps = Vec::new();

    for raw in source.split(['\n', ',', ';']) {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        let mut fields = token.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };

        let action = ActionKind::resolve(name);
        if !action.is_known() {
            tracing::warn!(action = action.name(), "unrecognized action in script");
        }

        let numbers: Vec<&str> = fields.collect();
        let (arg, delay_secs) = match numbers.as_slice() {
            [] => (0.0, DEFAULT_STEP_DELAY_SECS),
            [single] => match action.lone_numeric() {
                LoneNumeric::Delay => (0.0, parse_field(single, DEFAULT_STEP_DELAY_SECS, "delay")),
                LoneNumeric::Arg => (parse_field(single, 0.0, "arg"), DEFAULT_STEP_DELAY_SECS),
            },
            [first, second, ..] => (
                parse_field(first, 0.0, "arg"),
                parse_field(second, DEFAULT_STEP_DELAY_SECS, "delay"),
            ),
        };

        steps.push(AttackStep::new(action, delay_secs, arg));
    }

    steps
}

/// Parse a script straight into a looping sequence.
///
/// Scripts replay until cancelled or replaced; finite playback (defeat
/// scripts, transition stingers) wraps the step list with
/// `AttackSequence::once` instead.
pub fn parse_sequence(source: &str) -> AttackSequence {
    AttackSequence::looped(parse_script(source))
}

fn parse_field(field: &str, default: f32, role: &str) -> f32 {
    match field.parse::<f32>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(field, role, default, "numeric field did not parse, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_field_token() {
        let steps = parse_script("beam 90 0.5");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, ActionKind::Beam);
        assert!((steps[0].arg - 90.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_script_is_empty_list() {
        assert!(parse_script("").is_empty());
        assert!(parse_script("   \n  \t ").is_empty());
    }

    #[test]
    fn test_lone_numeric_on_fire_action_is_delay() {
        let steps = parse_script("shoot 0.5");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, ActionKind::Shoot);
        assert!((steps[0].delay_secs - 0.5).abs() < f32::EPSILON);
        assert!((steps[0].arg - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lone_numeric_on_parameterized_action_is_arg() {
        let steps = parse_script("volley 5");
        assert_eq!(steps.len(), 1);
        assert!((steps[0].arg - 5.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - DEFAULT_STEP_DELAY_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bare_action_gets_defaults() {
        let steps = parse_script("roar");
        assert_eq!(steps.len(), 1);
        assert!((steps[0].arg - 0.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - DEFAULT_STEP_DELAY_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_numeric_falls_back_per_field() {
        // Bad arg, good delay
        let steps = parse_script("beam wide 0.5");
        assert!((steps[0].arg - 0.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - 0.5).abs() < f32::EPSILON);

        // Good arg, bad delay
        let steps = parse_script("beam 45 soon");
        assert!((steps[0].arg - 45.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - DEFAULT_STEP_DELAY_SECS).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_token_never_aborts_rest() {
        let steps = parse_script("shoot abc, beam 1.0");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].action, ActionKind::Beam);
        assert!((steps[1].delay_secs - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_blank_tokens_skipped() {
        let steps = parse_script("shoot 0.3,, ;\n, beam 1.0");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_all_delimiters() {
        let steps = parse_script("shoot 0.3, beam 1.0; roar\nwait 0.2");
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2].action, ActionKind::Roar);
        assert_eq!(steps[3].action, ActionKind::Wait);
    }

    #[test]
    fn test_case_insensitive_actions() {
        let steps = parse_script("SHOOT 0.5, Beam 1.0");
        assert_eq!(steps[0].action, ActionKind::Shoot);
        assert_eq!(steps[1].action, ActionKind::Beam);
    }

    #[test]
    fn test_unknown_action_becomes_unknown_step() {
        let steps = parse_script("firestorm 3 1.5");
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].action, ActionKind::Unknown("firestorm".to_string()));
        assert!((steps[0].delay_secs - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_delay_clamped_to_zero() {
        let steps = parse_script("shoot -2.0");
        assert!((steps[0].delay_secs - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let steps = parse_script("beam 45 0.5 99 nonsense");
        assert_eq!(steps.len(), 1);
        assert!((steps[0].arg - 45.0).abs() < f32::EPSILON);
        assert!((steps[0].delay_secs - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_sequence_loops() {
        let seq = parse_sequence("shoot 0.3");
        assert!(seq.looping);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn test_example_script_round() {
        let steps = parse_script("shoot 0.3, beam 1.0, biggerbeam 2.0");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].action, ActionKind::Shoot);
        assert_eq!(steps[1].action, ActionKind::Beam);
        assert_eq!(steps[2].action, ActionKind::BiggerBeam);
        assert!((steps[2].delay_secs - 2.0).abs() < f32::EPSILON);
    }
}
