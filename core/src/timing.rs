//! Tick-driven timing primitives
//!
//! The engine never reads a wall clock. All time is the `dt` the host loop
//! feeds into `tick`, accumulated by these two helpers:
//! - `Countdown`: runs toward zero once (hurt recovery, defense windows)
//! - `Cooldown`: gates how often an operation may repeat (regeneration)

/// A one-way countdown toward zero.
///
/// Expired countdowns stay expired until `reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining_secs: f32,
}

impl Countdown {
    /// Start a countdown with `duration_secs` on the clock.
    pub fn new(duration_secs: f32) -> Self {
        Self {
            remaining_secs: duration_secs.max(0.0),
        }
    }

    /// A countdown that is already expired.
    pub fn finished() -> Self {
        Self {
            remaining_secs: 0.0,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns `true` only on the call that crosses zero, so callers can
    /// run an expiry action exactly once.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining_secs <= 0.0 {
            return false;
        }
        self.remaining_secs -= dt;
        if self.remaining_secs <= 0.0 {
            self.remaining_secs = 0.0;
            return true;
        }
        false
    }

    /// Restart with a new duration.
    pub fn reset(&mut self, duration_secs: f32) {
        self.remaining_secs = duration_secs.max(0.0);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs <= 0.0
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining_secs
    }
}

/// A repeat gate: ready at rest, unavailable for a fixed span after use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    duration_secs: f32,
    remaining_secs: f32,
}

impl Cooldown {
    /// Create a cooldown that starts ready (nothing has used it yet).
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs: duration_secs.max(0.0),
            remaining_secs: 0.0,
        }
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining_secs > 0.0 {
            self.remaining_secs = (self.remaining_secs - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_secs <= 0.0
    }

    /// Consume the cooldown, starting the full wait again.
    pub fn trigger(&mut self) {
        self.remaining_secs = self.duration_secs;
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_crosses_zero_once() {
        let mut cd = Countdown::new(1.0);
        assert!(!cd.tick(0.4));
        assert!(!cd.is_expired());
        assert!(cd.tick(0.7));
        assert!(cd.is_expired());
        // Already expired: never reports the crossing again
        assert!(!cd.tick(0.1));
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut cd = Countdown::new(0.5);
        cd.tick(10.0);
        assert!((cd.remaining_secs() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_countdown_reset_restarts() {
        let mut cd = Countdown::new(0.2);
        assert!(cd.tick(0.3));
        cd.reset(1.0);
        assert!(!cd.is_expired());
        assert!(!cd.tick(0.5));
        assert!(cd.tick(0.6));
    }

    #[test]
    fn test_finished_countdown_is_expired() {
        assert!(Countdown::finished().is_expired());
    }

    #[test]
    fn test_cooldown_starts_ready() {
        let cd = Cooldown::new(1.0);
        assert!(cd.is_ready());
    }

    #[test]
    fn test_cooldown_gates_until_elapsed() {
        let mut cd = Cooldown::new(1.0);
        cd.trigger();
        assert!(!cd.is_ready());
        cd.tick(0.5);
        assert!(!cd.is_ready());
        cd.tick(0.5);
        assert!(cd.is_ready());
        // Trigger again restarts the full wait
        cd.trigger();
        assert!(!cd.is_ready());
    }

    #[test]
    fn test_zero_duration_cooldown_always_ready() {
        let mut cd = Cooldown::new(0.0);
        cd.trigger();
        assert!(cd.is_ready());
    }
}
