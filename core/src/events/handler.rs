use crate::encounter::BossState;
use crate::events::StepContext;
use crate::sequence::AttackStep;

/// Capability surface a boss "skin" implements.
///
/// The engine holds no rendering or audio knowledge; every outward effect
/// goes through one of these callbacks. All methods default to no-ops so
/// a skin implements only what it cares about. Implement this for
/// renderers, audio routers, test recorders, consoles, etc.
pub trait EncounterHooks {
    /// One executed choreography step. The receiver spawns whatever the
    /// action calls for (projectiles, effects, audio) using `step.action`
    /// and `step.arg`; aiming actions get their resolved target in `ctx`.
    fn on_step(&mut self, _step: &AttackStep, _ctx: &StepContext) {}

    /// The phase machine entered `index`.
    fn on_phase_enter(&mut self, _index: usize) {}

    /// The phase machine left `index`.
    fn on_phase_exit(&mut self, _index: usize) {}

    /// Every actual state edge, after the state has changed.
    fn on_state_changed(&mut self, _from: BossState, _to: BossState) {}

    /// A one-shot threshold event crossed for the first time.
    fn on_threshold_event(&mut self, _id: &str) {}

    /// The active sequence was dropped before finishing.
    fn on_sequence_cancelled(&mut self) {}

    /// Health reached zero and the defeat choreography begins. Fired
    /// exactly once per boss lifetime.
    fn on_defeated(&mut self) {}
}

/// Hookless operation for hosts that only poll accessors.
impl EncounterHooks for () {}
