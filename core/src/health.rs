//! Health, mitigation, and one-shot threshold bookkeeping
//!
//! `HealthPool` holds the clamped hit-point pool with its defense window
//! and regeneration gate. `ThresholdFlags` records which health-threshold
//! events have already fired so each one runs once per boss lifetime.
//!
//! Nothing here errors. Out-of-range mutations clamp, a regeneration call
//! during cooldown is refused, and both report what actually happened
//! through their return values.

use hashbrown::HashSet;

use crate::timing::{Cooldown, Countdown};

/// Clamped hit-point pool. `0 <= current <= max` holds after every call.
#[derive(Debug, Clone)]
pub struct HealthPool {
    current: u32,
    max: u32,

    /// Mitigation factor while the defense window is open (0..1).
    defense_reduction: f32,
    defense_window: Countdown,

    regen_cooldown: Cooldown,
}

impl HealthPool {
    /// A full pool. `max` is raised to 1 if 0 is passed, keeping the
    /// fraction well-defined.
    pub fn new(max: u32, regen_cooldown_secs: f32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            max,
            defense_reduction: 0.0,
            defense_window: Countdown::finished(),
            regen_cooldown: Cooldown::new(regen_cooldown_secs),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Remaining health as a fraction of max, in `0..=1`.
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    pub fn defense_active(&self) -> bool {
        !self.defense_window.is_expired()
    }

    /// Apply incoming damage, mitigated if a defense window is open.
    ///
    /// Effective damage is `amount * (1 - reduction)`, truncated toward
    /// zero. Returns how much health was actually removed after clamping.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let effective = if self.defense_active() {
            (amount as f32 * (1.0 - self.defense_reduction)) as u32
        } else {
            amount
        };

        let before = self.current;
        self.current = self.current.saturating_sub(effective);
        before - self.current
    }

    /// Restore health, clamped to max.
    ///
    /// Refused (returns `false`) while the regeneration cooldown is still
    /// running; a successful call restarts the cooldown.
    pub fn regenerate(&mut self, amount: u32) -> bool {
        if !self.regen_cooldown.is_ready() {
            return false;
        }
        self.current = self.current.saturating_add(amount).min(self.max);
        self.regen_cooldown.trigger();
        true
    }

    /// Open (or close) the mitigation window.
    ///
    /// `reduction` is clamped to `0..=1`. Passing `active = false` closes
    /// any open window immediately.
    pub fn set_defense(&mut self, active: bool, duration_secs: f32, reduction: f32) {
        if active {
            self.defense_reduction = reduction.clamp(0.0, 1.0);
            self.defense_window.reset(duration_secs);
        } else {
            self.defense_window = Countdown::finished();
        }
    }

    /// Advance the defense window and regeneration cooldown.
    pub fn tick(&mut self, dt: f32) {
        if self.defense_window.tick(dt) {
            tracing::debug!("defense window expired");
        }
        self.regen_cooldown.tick(dt);
    }
}

/// One-shot markers for health-threshold events, keyed by event id.
#[derive(Debug, Clone, Default)]
pub struct ThresholdFlags {
    fired: HashSet<String>,
}

impl ThresholdFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as fired. Returns `true` only the first time.
    pub fn fire(&mut self, id: &str) -> bool {
        if self.fired.contains(id) {
            return false;
        }
        self.fired.insert(id.to_string());
        true
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_and_regen_stay_clamped() {
        let mut pool = HealthPool::new(100, 0.0);

        pool.apply_damage(30);
        assert_eq!(pool.current(), 70);

        // Overkill clamps at zero
        pool.apply_damage(500);
        assert_eq!(pool.current(), 0);
        assert!(pool.is_depleted());

        // Overheal clamps at max
        pool.regenerate(50);
        assert_eq!(pool.current(), 50);
        pool.regenerate(5000);
        assert_eq!(pool.current(), 100);
    }

    #[test]
    fn test_defense_reduction_math() {
        let mut pool = HealthPool::new(100, 1.0);
        pool.set_defense(true, 5.0, 0.75);

        let applied = pool.apply_damage(100);
        assert_eq!(applied, 25);
        assert_eq!(pool.current(), 75);
    }

    #[test]
    fn test_full_mitigation_blocks_everything() {
        let mut pool = HealthPool::new(100, 1.0);
        pool.set_defense(true, 5.0, 1.0);

        assert_eq!(pool.apply_damage(100), 0);
        assert_eq!(pool.current(), 100);
    }

    #[test]
    fn test_defense_window_expires_on_tick() {
        let mut pool = HealthPool::new(100, 1.0);
        pool.set_defense(true, 1.0, 0.5);
        assert!(pool.defense_active());

        pool.tick(0.5);
        assert!(pool.defense_active());
        pool.tick(0.6);
        assert!(!pool.defense_active());

        // Mitigation no longer applies
        assert_eq!(pool.apply_damage(40), 40);
    }

    #[test]
    fn test_defense_can_be_closed_early() {
        let mut pool = HealthPool::new(100, 1.0);
        pool.set_defense(true, 10.0, 0.5);
        pool.set_defense(false, 0.0, 0.0);
        assert!(!pool.defense_active());
    }

    #[test]
    fn test_regen_cooldown_gates_repeat_heals() {
        let mut pool = HealthPool::new(100, 2.0);
        pool.apply_damage(60);

        assert!(pool.regenerate(10));
        assert_eq!(pool.current(), 50);

        // Cooldown running: refused, health untouched
        assert!(!pool.regenerate(10));
        assert_eq!(pool.current(), 50);

        pool.tick(2.5);
        assert!(pool.regenerate(10));
        assert_eq!(pool.current(), 60);
    }

    #[test]
    fn test_zero_max_is_raised_to_one() {
        let pool = HealthPool::new(0, 0.0);
        assert_eq!(pool.max(), 1);
        assert!((pool.fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_flags_fire_once() {
        let mut flags = ThresholdFlags::new();

        assert!(flags.fire("halfway"));
        assert!(!flags.fire("halfway"));
        assert!(flags.has_fired("halfway"));
        assert!(!flags.has_fired("enrage"));
        assert_eq!(flags.fired_count(), 1);
    }
}
