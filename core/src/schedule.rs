//! Cooperative advancement of the active attack sequence
//!
//! One boss runs at most one sequence at a time. The scheduler owns the
//! suspended-execution record for it (`ScheduledTask`) and advances it in
//! `tick`: subtract `dt` from the current step's wait, fire the step when
//! the wait crosses zero, load the next step's delay, repeat. Zero-delay
//! steps keep advancing within the same tick, bounded by
//! `MAX_STEPS_PER_TICK`.
//!
//! The scheduler is pure machinery. It returns the steps that fired and
//! leaves dispatch (target resolution, unknown-action filtering, host
//! callbacks) to the encounter layer.

use crate::sequence::{AttackSequence, AttackStep};

/// Upper bound on steps fired in a single `tick` call.
///
/// A run of zero-delay steps longer than this carries over: the wait is
/// left at zero so advancement resumes immediately on the next tick.
pub const MAX_STEPS_PER_TICK: usize = 32;

/// Suspended-execution record for the active sequence.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    sequence: AttackSequence,
    cursor: usize,
    remaining_wait_secs: f32,
}

impl ScheduledTask {
    fn new(sequence: AttackSequence) -> Self {
        let remaining_wait_secs = sequence.step(0).map(|s| s.delay_secs).unwrap_or(0.0);
        Self {
            sequence,
            cursor: 0,
            remaining_wait_secs,
        }
    }

    /// Index of the step waiting to fire.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Seconds until the current step fires.
    pub fn remaining_wait_secs(&self) -> f32 {
        self.remaining_wait_secs
    }

    pub fn sequence(&self) -> &AttackSequence {
        &self.sequence
    }
}

/// Runs one sequence per boss, one step at a time.
#[derive(Debug, Clone, Default)]
pub struct SequenceScheduler {
    task: Option<ScheduledTask>,
}

impl SequenceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `sequence` the active task, unconditionally replacing any
    /// previous one. The first step's delay becomes the initial wait.
    pub fn start(&mut self, sequence: AttackSequence) {
        self.task = Some(ScheduledTask::new(sequence));
    }

    /// Drop the active task immediately. No further steps fire from it.
    ///
    /// Returns whether a task was actually dropped.
    pub fn cancel(&mut self) -> bool {
        self.task.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    pub fn active_task(&self) -> Option<&ScheduledTask> {
        self.task.as_ref()
    }

    /// Advance the active task by `dt` seconds and return the steps that
    /// fired, in firing order.
    ///
    /// A finite sequence that runs out leaves the scheduler idle; an empty
    /// looping sequence stays active and fires nothing (deliberate passive
    /// choreography). Wait surplus carries across steps, so a large `dt`
    /// can fire several steps in one call without drifting the timeline.
    pub fn tick(&mut self, dt: f32) -> Vec<AttackStep> {
        let mut fired = Vec::new();
        let Some(task) = self.task.as_mut() else {
            return fired;
        };

        if task.sequence.is_empty() {
            if !task.sequence.looping {
                self.task = None;
            }
            return fired;
        }

        task.remaining_wait_secs -= dt;

        let mut finished = false;
        while task.remaining_wait_secs <= 0.0 {
            if fired.len() >= MAX_STEPS_PER_TICK {
                // Defer the rest of the burst to the next tick.
                task.remaining_wait_secs = 0.0;
                tracing::debug!(
                    fired = fired.len(),
                    "zero-delay run hit the per-tick bound, deferring"
                );
                break;
            }

            fired.push(task.sequence.steps[task.cursor].clone());

            task.cursor += 1;
            if task.cursor >= task.sequence.len() {
                if task.sequence.looping {
                    task.cursor = 0;
                } else {
                    finished = true;
                    break;
                }
            }
            task.remaining_wait_secs += task.sequence.steps[task.cursor].delay_secs;
        }

        if finished {
            self.task = None;
        }

        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ActionKind;

    fn step(action: ActionKind, delay_secs: f32) -> AttackStep {
        AttackStep::new(action, delay_secs, 0.0)
    }

    #[test]
    fn test_first_step_waits_its_own_delay() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::once(vec![step(ActionKind::Shoot, 0.5)]));

        assert!(sched.tick(0.4).is_empty());
        let fired = sched.tick(0.2);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].action, ActionKind::Shoot);
    }

    #[test]
    fn test_loop_replays_in_order() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(vec![
            step(ActionKind::Beam, 1.0),
            step(ActionKind::Shoot, 0.3),
        ]));

        // Fires at 1.0, 1.3, 2.3, 2.6
        let mut fired = Vec::new();
        for _ in 0..6 {
            fired.extend(sched.tick(0.5));
        }
        let actions: Vec<_> = fired.iter().map(|s| s.action.clone()).collect();
        assert_eq!(
            actions,
            vec![
                ActionKind::Beam,
                ActionKind::Shoot,
                ActionKind::Beam,
                ActionKind::Shoot,
            ]
        );
        assert!(sched.is_active());
    }

    #[test]
    fn test_large_dt_fires_multiple_steps() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(vec![step(ActionKind::Shoot, 0.2)]));

        // 0.2, 0.4, 0.6, 0.8, 1.0 all fall inside one big tick
        assert_eq!(sched.tick(1.1).len(), 5);
    }

    #[test]
    fn test_zero_delay_run_is_bounded_and_carries_over() {
        let mut sched = SequenceScheduler::new();
        let burst: Vec<_> = (0..40).map(|_| step(ActionKind::Shoot, 0.0)).collect();
        sched.start(AttackSequence::once(burst));

        assert_eq!(sched.tick(0.1).len(), MAX_STEPS_PER_TICK);
        assert!(sched.is_active());

        // Remainder fires next tick, then the finite sequence ends
        assert_eq!(sched.tick(0.1).len(), 8);
        assert!(!sched.is_active());
    }

    #[test]
    fn test_cancel_stops_everything() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(vec![step(ActionKind::Shoot, 0.1)]));

        assert!(sched.cancel());
        assert!(!sched.is_active());
        assert!(sched.tick(10.0).is_empty());
        // Second cancel has nothing to drop
        assert!(!sched.cancel());
    }

    #[test]
    fn test_finite_sequence_ends_idle() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::once(vec![
            step(ActionKind::Roar, 0.2),
            step(ActionKind::Collapse, 0.2),
        ]));

        assert_eq!(sched.tick(0.5).len(), 2);
        assert!(!sched.is_active());
        assert!(sched.tick(0.5).is_empty());
    }

    #[test]
    fn test_empty_looping_sequence_stays_active() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(Vec::new()));

        for _ in 0..100 {
            assert!(sched.tick(0.5).is_empty());
        }
        assert!(sched.is_active());
    }

    #[test]
    fn test_empty_finite_sequence_ends_immediately() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::once(Vec::new()));

        assert!(sched.tick(0.1).is_empty());
        assert!(!sched.is_active());
    }

    #[test]
    fn test_start_replaces_active_task() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(vec![step(ActionKind::Beam, 0.2)]));
        sched.tick(0.15); // almost due

        sched.start(AttackSequence::looped(vec![step(ActionKind::Roar, 0.3)]));
        // The replaced task's beam never fires
        assert!(sched.tick(0.1).is_empty());
        let fired = sched.tick(0.25);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].action, ActionKind::Roar);
    }

    #[test]
    fn test_wait_surplus_carries_between_steps() {
        let mut sched = SequenceScheduler::new();
        sched.start(AttackSequence::looped(vec![
            step(ActionKind::Shoot, 0.3),
            step(ActionKind::Beam, 0.3),
        ]));

        // Steps land on the 0.3 grid even with a mismatched dt
        assert!(sched.tick(0.25).is_empty());
        assert_eq!(sched.tick(0.25).len(), 1); // t=0.50, step due 0.3
        assert_eq!(sched.tick(0.25).len(), 1); // t=0.75, step due 0.6
        assert!(sched.tick(0.05).is_empty()); // t=0.80, next due 0.9
        assert_eq!(sched.tick(0.25).len(), 1); // t=1.05
    }
}
