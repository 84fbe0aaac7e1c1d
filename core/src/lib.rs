pub mod boss;
pub mod encounter;
pub mod events;
pub mod health;
pub mod pattern;
pub mod schedule;
pub mod script;
pub mod sequence;
pub mod timing;

// Re-exports for convenience
pub use boss::{
    BossConfig, BossDefinition, BossError, PhaseDefinition, ThresholdEventDefinition,
    load_definition_file, load_definitions, parse_definitions,
};
pub use boss::{DefinitionEvent, DefinitionWatcher};
pub use encounter::{BossEncounter, BossState};
pub use events::{EmptyWorld, EncounterHooks, EncounterSignal, EntityRef, StepContext, World};
pub use health::{HealthPool, ThresholdFlags};
pub use pattern::{PatternId, PatternRegistry};
pub use schedule::{MAX_STEPS_PER_TICK, ScheduledTask, SequenceScheduler};
pub use script::{ActionKind, DEFAULT_STEP_DELAY_SECS, parse_script, parse_sequence};
pub use sequence::{AttackSequence, AttackStep};
pub use timing::{Cooldown, Countdown};
