//! Attack choreography value types
//!
//! A step is one timed unit of choreography; a sequence is an ordered run
//! of steps, optionally looping. Sequences come from two places: the
//! script parser (designer text) and the pattern registry (built-ins).
//! Both are immutable once built; the scheduler only reads them.

use crate::script::ActionKind;

/// One timed unit of choreography.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackStep {
    /// What the step does when it fires.
    pub action: ActionKind,

    /// Seconds to wait before this step's action fires.
    pub delay_secs: f32,

    /// Action-specific argument (angle, count, intensity). Zero when the
    /// author gave none.
    pub arg: f32,
}

impl AttackStep {
    pub fn new(action: ActionKind, delay_secs: f32, arg: f32) -> Self {
        Self {
            action,
            delay_secs: delay_secs.max(0.0),
            arg,
        }
    }
}

/// An ordered, possibly looping, run of steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttackSequence {
    pub steps: Vec<AttackStep>,
    /// When true, the cursor wraps to the first step after the last.
    pub looping: bool,
}

impl AttackSequence {
    /// A sequence that plays once and ends.
    pub fn once(steps: Vec<AttackStep>) -> Self {
        Self {
            steps,
            looping: false,
        }
    }

    /// A sequence that replays until cancelled or replaced.
    pub fn looped(steps: Vec<AttackStep>) -> Self {
        Self {
            steps,
            looping: true,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step(&self, index: usize) -> Option<&AttackStep> {
        self.steps.get(index)
    }
}
