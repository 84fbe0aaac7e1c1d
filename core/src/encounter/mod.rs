//! Boss encounter orchestration
//!
//! `BossEncounter` owns one boss instance end to end: the health pool,
//! the phase list from its definition, the lifecycle state, and the
//! sequence scheduler. The host drives it with `tick(dt)` plus explicit
//! calls (`engage`, `apply_damage`, `play_script`, ...) from the same
//! update thread; everything outward goes through `EncounterHooks`.
//!
//! Choreography selection per phase: an authored script wins when present
//! and non-empty, otherwise the phase's pattern set is cycled round-robin
//! on each re-entry into attacking, otherwise the registry fallback.

mod state;


pub use state::BossState;

use crate::boss::BossDefinition;
use crate::events::{EncounterHooks, StepContext, World};
use crate::health::{HealthPool, ThresholdFlags};
use crate::pattern::{PatternId, PatternRegistry};
use crate::schedule::SequenceScheduler;
use crate::script::parse_script;
use crate::sequence::AttackSequence;
use crate::timing::Countdown;

/// One live boss, spawned from a definition.
#[derive(Debug, Clone)]
pub struct BossEncounter {
    // ─── Configuration ──────────────────────────────────────────────────────
    definition: BossDefinition,
    registry: PatternRegistry,

    // ─── Health ─────────────────────────────────────────────────────────────
    health: HealthPool,
    flags: ThresholdFlags,

    // ─── Lifecycle ──────────────────────────────────────────────────────────
    state: BossState,
    hurt_recovery: Countdown,
    combat_time_secs: f32,

    // ─── Phases ─────────────────────────────────────────────────────────────
    phase_index: usize,
    /// Target phase while a transition stinger plays
    pending_phase: Option<usize>,
    /// Round-robin cursor into the current phase's pattern set
    pattern_cursor: usize,

    // ─── Choreography ───────────────────────────────────────────────────────
    scheduler: SequenceScheduler,
    /// Set by an explicit cancel: stay sequence-less until told otherwise
    halted: bool,
}

impl BossEncounter {
    // ═══════════════════════════════════════════════════════════════════════
    // Spawn & Accessors
    // ═══════════════════════════════════════════════════════════════════════

    /// Spawn a boss from its definition. The encounter starts `Idle` at
    /// full health; nothing runs until `engage`.
    pub fn new(definition: BossDefinition, registry: PatternRegistry) -> Self {
        let health = HealthPool::new(definition.max_health, definition.regen_cooldown_secs);
        Self {
            definition,
            registry,
            health,
            flags: ThresholdFlags::new(),
            state: BossState::Idle,
            hurt_recovery: Countdown::finished(),
            combat_time_secs: 0.0,
            phase_index: 0,
            pending_phase: None,
            pattern_cursor: 0,
            scheduler: SequenceScheduler::new(),
            halted: false,
        }
    }

    pub fn state(&self) -> BossState {
        self.state
    }

    pub fn health(&self) -> &HealthPool {
        &self.health
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn phase_name(&self) -> &str {
        &self.definition.phases[self.phase_index].name
    }

    pub fn combat_time_secs(&self) -> f32 {
        self.combat_time_secs
    }

    pub fn definition(&self) -> &BossDefinition {
        &self.definition
    }

    pub fn scheduler(&self) -> &SequenceScheduler {
        &self.scheduler
    }

    /// Defeated and done playing the defeat choreography. The owning
    /// world removes the instance once this turns true.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal() && !self.scheduler.is_active()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Engagement & Ticking
    // ═══════════════════════════════════════════════════════════════════════

    /// The designer-defined start condition fired. Enters attacking in
    /// the deepest phase the current health fraction calls for (pre-fight
    /// chip damage counts). No-op unless `Idle`.
    pub fn engage(&mut self, hooks: &mut dyn EncounterHooks) {
        if self.state != BossState::Idle {
            return;
        }
        self.set_state(BossState::Attacking, hooks);
        let target = self.definition.deepest_phase_at(self.health.fraction());
        self.enter_phase(target, hooks);
        self.start_phase_sequence();
        tracing::debug!(boss = %self.definition.id, phase = self.phase_index, "engaged");
    }

    /// Advance the encounter by `dt` seconds.
    ///
    /// One cooperative step: defense/regeneration timers move, the
    /// state-specific work runs (hurt recovery, transition playback,
    /// choreography), and fired steps are dispatched through `hooks`
    /// with targets resolved against `world`.
    pub fn tick(&mut self, dt: f32, world: &dyn World, hooks: &mut dyn EncounterHooks) {
        match self.state {
            BossState::Idle => {
                self.health.tick(dt);
            }
            BossState::Attacking => {
                self.combat_time_secs += dt;
                self.health.tick(dt);
                self.advance_scheduler(dt, world, hooks);
                // A finite sequence ran out: rotate to the next pattern
                if !self.scheduler.is_active() && !self.halted {
                    self.start_phase_sequence();
                }
            }
            BossState::Hurt => {
                self.combat_time_secs += dt;
                self.health.tick(dt);
                if self.hurt_recovery.tick(dt) && !self.health.is_depleted() {
                    self.set_state(BossState::Attacking, hooks);
                    if !self.scheduler.is_active() && !self.halted {
                        self.start_phase_sequence();
                    }
                }
            }
            BossState::Transitioning => {
                self.combat_time_secs += dt;
                self.health.tick(dt);
                self.advance_scheduler(dt, world, hooks);
                if !self.scheduler.is_active() {
                    self.finish_transition(hooks);
                }
            }
            BossState::Defeated => {
                // Only the defeat choreography still plays
                self.advance_scheduler(dt, world, hooks);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Damage & Health
    // ═══════════════════════════════════════════════════════════════════════

    /// Apply incoming damage and run every consequence: mitigation,
    /// clamping, one-shot threshold events, phase transitions, the hurt
    /// stagger, and defeat. Returns health actually removed.
    pub fn apply_damage(&mut self, amount: u32, hooks: &mut dyn EncounterHooks) -> u32 {
        if self.state.is_terminal() {
            return 0;
        }

        let applied = self.health.apply_damage(amount);
        let fraction = self.health.fraction();

        // Events fire before any phase change on the same crossing
        self.fire_threshold_events(fraction, hooks);

        if self.health.is_depleted() {
            self.enter_defeated(hooks);
            return applied;
        }

        let target = self.definition.deepest_phase_at(fraction);
        match self.state {
            BossState::Attacking | BossState::Hurt if target > self.phase_index => {
                self.begin_transition(target, hooks);
            }
            BossState::Transitioning => {
                // Deepen the pending target; the stinger already playing
                // finishes as scheduled
                if let Some(pending) = self.pending_phase
                    && target > pending
                {
                    tracing::debug!(from = pending, to = target, "transition target deepened");
                    self.pending_phase = Some(target);
                }
            }
            BossState::Attacking => {
                // A fully mitigated hit does not stagger
                if applied > 0 {
                    self.set_state(BossState::Hurt, hooks);
                    if self.cancel_active() {
                        hooks.on_sequence_cancelled();
                    }
                    self.hurt_recovery.reset(self.definition.hurt_recovery_secs);
                }
            }
            BossState::Hurt => {
                // Already staggered; the recovery timer keeps running
            }
            BossState::Idle => {
                // Not engaged: health and flags move, state does not
            }
            BossState::Defeated => {
                // Unreachable: terminal states returned above
            }
        }

        applied
    }

    /// Restore health, subject to the regeneration cooldown.
    pub fn regenerate(&mut self, amount: u32) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.health.regenerate(amount)
    }

    /// Open or close the damage-mitigation window.
    pub fn set_defense(&mut self, active: bool, duration_secs: f32, reduction: f32) {
        self.health.set_defense(active, duration_secs, reduction);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Choreography Control
    // ═══════════════════════════════════════════════════════════════════════

    /// Swap in an authored script as the active sequence (loops until
    /// replaced). An empty or whitespace-only script falls back to the
    /// current phase's own choreography.
    pub fn play_script(&mut self, source: &str) {
        if self.state.is_terminal() {
            return;
        }
        let steps = parse_script(source);
        if steps.is_empty() {
            tracing::debug!("script parsed empty, using phase choreography");
            self.start_phase_sequence();
        } else {
            self.halted = false;
            self.scheduler.start(AttackSequence::looped(steps));
        }
    }

    /// Swap in a registry pattern as the active sequence.
    pub fn play_pattern(&mut self, id: PatternId) {
        if self.state.is_terminal() {
            return;
        }
        self.halted = false;
        self.scheduler.start(self.registry.lookup(id).clone());
    }

    /// Drop the active sequence and stay passive until new choreography
    /// is requested (or a phase change restarts it).
    pub fn cancel_attack(&mut self, hooks: &mut dyn EncounterHooks) {
        if self.cancel_active() {
            self.halted = true;
            hooks.on_sequence_cancelled();
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internal
    // ═══════════════════════════════════════════════════════════════════════

    /// The single choke point for lifecycle edges. Illegal edges and
    /// self-edges are refused, so enter work never double-fires.
    fn set_state(&mut self, next: BossState, hooks: &mut dyn EncounterHooks) -> bool {
        if self.state == next || !self.state.can_move_to(next) {
            return false;
        }
        let old = self.state;
        self.state = next;
        tracing::debug!(from = %old, to = %next, "state change");
        hooks.on_state_changed(old, next);
        true
    }

    fn enter_phase(&mut self, index: usize, hooks: &mut dyn EncounterHooks) {
        self.phase_index = index;
        self.pattern_cursor = 0;
        self.halted = false;
        tracing::debug!(phase = index, name = %self.definition.phases[index].name, "phase entered");
        hooks.on_phase_enter(index);
    }

    /// Fire every not-yet-fired threshold event the fraction has reached,
    /// deepest-last (events are loader-sorted by descending threshold).
    fn fire_threshold_events(&mut self, fraction: f32, hooks: &mut dyn EncounterHooks) {
        for event in &self.definition.events {
            if fraction <= event.health_fraction && self.flags.fire(&event.id) {
                tracing::debug!(event = %event.id, "threshold event fired");
                hooks.on_threshold_event(&event.id);
            }
        }
    }

    /// A phase threshold was crossed while live. Closes the current
    /// phase; with an authored stinger the encounter detours through
    /// `Transitioning`, otherwise the phase swaps in place.
    fn begin_transition(&mut self, target: usize, hooks: &mut dyn EncounterHooks) {
        let stinger = self
            .definition
            .phases
            .get(target)
            .and_then(|p| p.transition_script.as_deref())
            .map(parse_script)
            .unwrap_or_default();

        if self.cancel_active() {
            hooks.on_sequence_cancelled();
        }
        hooks.on_phase_exit(self.phase_index);

        if stinger.is_empty() {
            self.enter_phase(target, hooks);
            if self.state == BossState::Attacking {
                self.start_phase_sequence();
            }
            // While Hurt the new phase's choreography waits for recovery
        } else {
            self.pending_phase = Some(target);
            self.set_state(BossState::Transitioning, hooks);
            self.scheduler.start(AttackSequence::once(stinger));
        }
    }

    /// Transition stinger finished: enter the (possibly deepened) target
    /// phase and resume attacking.
    fn finish_transition(&mut self, hooks: &mut dyn EncounterHooks) {
        let target = self.pending_phase.take().unwrap_or(self.phase_index);
        self.enter_phase(target, hooks);
        self.set_state(BossState::Attacking, hooks);
        self.start_phase_sequence();
    }

    fn enter_defeated(&mut self, hooks: &mut dyn EncounterHooks) {
        if self.cancel_active() {
            hooks.on_sequence_cancelled();
        }
        self.set_state(BossState::Defeated, hooks);
        hooks.on_defeated();

        let farewell = self
            .definition
            .defeat_script
            .as_deref()
            .map(parse_script)
            .unwrap_or_default();
        if !farewell.is_empty() {
            self.scheduler.start(AttackSequence::once(farewell));
        }
        tracing::debug!(boss = %self.definition.id, "defeated");
    }

    /// Pick and start the current phase's sequence: script first, then
    /// the pattern set round-robin, then the registry fallback.
    fn start_phase_sequence(&mut self) {
        self.halted = false;
        let phase = &self.definition.phases[self.phase_index];

        if let Some(script) = phase.script.as_deref() {
            let steps = parse_script(script);
            if !steps.is_empty() {
                self.scheduler.start(AttackSequence::looped(steps));
                return;
            }
        }

        let sequence = if phase.patterns.is_empty() {
            self.registry.fallback().clone()
        } else {
            let id = phase.patterns[self.pattern_cursor % phase.patterns.len()];
            self.pattern_cursor += 1;
            self.registry.lookup(id).clone()
        };
        self.scheduler.start(sequence);
    }

    /// Advance choreography and dispatch what fired. Unknown actions are
    /// timed no-ops; aiming actions without a target skip their turn.
    fn advance_scheduler(&mut self, dt: f32, world: &dyn World, hooks: &mut dyn EncounterHooks) {
        let fired = self.scheduler.tick(dt);
        for step in fired {
            if !step.action.is_known() {
                tracing::debug!(action = step.action.name(), "skipping unknown action step");
                continue;
            }

            let target = if step.action.aims() {
                match world.find_target() {
                    Some(target) => Some(target),
                    None => {
                        tracing::debug!(action = step.action.name(), "no target, step skipped");
                        continue;
                    }
                }
            } else {
                None
            };

            let ctx = StepContext {
                target,
                combat_time_secs: self.combat_time_secs,
                phase_index: self.phase_index,
            };
            hooks.on_step(&step, &ctx);
        }
    }

    fn cancel_active(&mut self) -> bool {
        self.scheduler.cancel()
    }
}
