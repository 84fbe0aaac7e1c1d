//! Callback and signal surface between the engine and its host
//!
//! The engine consumes one inbound capability (`World`, for target
//! queries) and speaks outward through one trait (`EncounterHooks`).
//! `EncounterSignal` mirrors the hook vocabulary as plain data for
//! harnesses that record instead of render.

mod handler;
mod signal;

pub use handler::EncounterHooks;
pub use signal::EncounterSignal;

/// Opaque handle to a host-side entity (player, minion, prop).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef(pub u64);

/// World queries the engine needs while running.
///
/// `find_target` is consulted per aiming step; returning `None` skips
/// that step for the tick and the sequence continues.
pub trait World {
    fn find_target(&self) -> Option<EntityRef>;
}

/// A world with nothing in it. Aiming steps never fire.
pub struct EmptyWorld;

impl World for EmptyWorld {
    fn find_target(&self) -> Option<EntityRef> {
        None
    }
}

/// Context handed to `EncounterHooks::on_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    /// Resolved target for aiming actions, `None` for self-cast steps
    pub target: Option<EntityRef>,

    /// Seconds since the encounter was engaged
    pub combat_time_secs: f32,

    /// Current phase index
    pub phase_index: usize,
}
