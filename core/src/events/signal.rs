use crate::encounter::BossState;
use crate::events::EntityRef;
use crate::script::ActionKind;

/// Signals emitted over the lifetime of an encounter.
///
/// These mirror the `EncounterHooks` callbacks one-to-one so harnesses
/// can record what fired and assert on (or print) the stream afterward.
/// The engine itself only speaks through the hooks trait.
#[derive(Debug, Clone, PartialEq)]
pub enum EncounterSignal {
    // Choreography
    Step {
        action: ActionKind,
        arg: f32,
        /// Resolved target for aiming actions, `None` otherwise
        target: Option<EntityRef>,
    },

    // Phase machine
    PhaseEntered(usize),
    PhaseExited(usize),

    // Lifecycle
    StateChanged {
        from: BossState,
        to: BossState,
    },
    ThresholdEvent(String),
    SequenceCancelled,
    Defeated,
}

impl EncounterSignal {
    /// Short discriminant name, handy for timelines and terse assertions.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EncounterSignal::Step { .. } => "step",
            EncounterSignal::PhaseEntered(_) => "phase_entered",
            EncounterSignal::PhaseExited(_) => "phase_exited",
            EncounterSignal::StateChanged { .. } => "state_changed",
            EncounterSignal::ThresholdEvent(_) => "threshold_event",
            EncounterSignal::SequenceCancelled => "sequence_cancelled",
            EncounterSignal::Defeated => "defeated",
        }
    }
}
