//! Boss lifecycle states
//!
//! The legal edges form a fixed table checked by `can_move_to`; the
//! encounter routes every change through one choke point, so an illegal
//! edge is simply refused and re-entering the current state is a no-op
//! (enter hooks never double-fire).

use std::fmt;

/// Lifecycle of one boss instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BossState {
    /// Spawned but not yet engaged. No choreography, no combat clock.
    Idle,
    /// Running the active phase's choreography.
    Attacking,
    /// Staggered by a hit; choreography cancelled until recovery.
    Hurt,
    /// Playing a phase-change stinger; normal scheduling suspended.
    Transitioning,
    /// Health reached zero. Terminal.
    Defeated,
}

impl BossState {
    /// Whether the edge `self -> next` exists in the transition table.
    pub const fn can_move_to(self, next: BossState) -> bool {
        match (self, next) {
            // Terminal: nothing leaves Defeated
            (BossState::Defeated, _) => false,
            // Depletion can interrupt any live state
            (_, BossState::Defeated) => true,
            (BossState::Idle, BossState::Attacking) => true,
            (BossState::Attacking, BossState::Hurt) => true,
            (BossState::Hurt, BossState::Attacking) => true,
            (BossState::Attacking | BossState::Hurt, BossState::Transitioning) => true,
            (BossState::Transitioning, BossState::Attacking) => true,
            _ => false,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, BossState::Defeated)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BossState::Idle => "idle",
            BossState::Attacking => "attacking",
            BossState::Hurt => "hurt",
            BossState::Transitioning => "transitioning",
            BossState::Defeated => "defeated",
        }
    }
}

impl fmt::Display for BossState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_edges() {
        assert!(BossState::Idle.can_move_to(BossState::Attacking));
        assert!(BossState::Attacking.can_move_to(BossState::Hurt));
        assert!(BossState::Hurt.can_move_to(BossState::Attacking));
        assert!(BossState::Attacking.can_move_to(BossState::Transitioning));
        assert!(BossState::Hurt.can_move_to(BossState::Transitioning));
        assert!(BossState::Transitioning.can_move_to(BossState::Attacking));
    }

    #[test]
    fn test_every_live_state_can_be_defeated() {
        for state in [
            BossState::Idle,
            BossState::Attacking,
            BossState::Hurt,
            BossState::Transitioning,
        ] {
            assert!(state.can_move_to(BossState::Defeated));
        }
    }

    #[test]
    fn test_defeated_is_terminal() {
        assert!(BossState::Defeated.is_terminal());
        for next in [
            BossState::Idle,
            BossState::Attacking,
            BossState::Hurt,
            BossState::Transitioning,
            BossState::Defeated,
        ] {
            assert!(!BossState::Defeated.can_move_to(next));
        }
    }

    #[test]
    fn test_illegal_edges_refused() {
        assert!(!BossState::Idle.can_move_to(BossState::Hurt));
        assert!(!BossState::Idle.can_move_to(BossState::Transitioning));
        assert!(!BossState::Hurt.can_move_to(BossState::Hurt));
        assert!(!BossState::Transitioning.can_move_to(BossState::Hurt));
        assert!(!BossState::Attacking.can_move_to(BossState::Idle));
    }
}
