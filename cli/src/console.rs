//! Console skin and stub world
//!
//! `ConsoleSkin` implements `EncounterHooks` by printing one timeline
//! line per signal, clock-stamped with simulated combat time. `StubWorld`
//! answers target queries with a single toggleable dummy entity.

use tyrant_core::BossEncounter;
use tyrant_core::encounter::BossState;
use tyrant_core::events::{EncounterHooks, EntityRef, StepContext, World};
use tyrant_core::sequence::AttackStep;

/// Prints the signal stream as a timeline.
pub struct ConsoleSkin {
    clock_secs: f32,
}

impl ConsoleSkin {
    pub fn new() -> Self {
        Self { clock_secs: 0.0 }
    }

    /// Stamp for signals that carry no time of their own.
    pub fn set_clock(&mut self, secs: f32) {
        self.clock_secs = secs;
    }

    fn line(&self, secs: f32, text: &str) {
        println!("[{secs:7.2}s] {text}");
    }
}

impl EncounterHooks for ConsoleSkin {
    fn on_step(&mut self, step: &AttackStep, ctx: &StepContext) {
        let target = match ctx.target {
            Some(EntityRef(id)) => format!(" -> entity#{id}"),
            None => String::new(),
        };
        self.line(
            ctx.combat_time_secs,
            &format!("step   {} (arg {}){target}", step.action, step.arg),
        );
    }

    fn on_phase_enter(&mut self, index: usize) {
        self.line(self.clock_secs, &format!("phase  entered {index}"));
    }

    fn on_phase_exit(&mut self, index: usize) {
        self.line(self.clock_secs, &format!("phase  exited {index}"));
    }

    fn on_state_changed(&mut self, from: BossState, to: BossState) {
        self.line(self.clock_secs, &format!("state  {from} -> {to}"));
    }

    fn on_threshold_event(&mut self, id: &str) {
        self.line(self.clock_secs, &format!("event  {id}"));
    }

    fn on_sequence_cancelled(&mut self) {
        self.line(self.clock_secs, "attack sequence cancelled");
    }

    fn on_defeated(&mut self) {
        self.line(self.clock_secs, "defeat");
    }
}

/// Stand-in world holding at most one target.
pub struct StubWorld {
    target_present: bool,
}

impl StubWorld {
    pub fn new() -> Self {
        Self {
            target_present: true,
        }
    }

    pub fn set_target(&mut self, present: bool) {
        self.target_present = present;
    }

    pub fn has_target(&self) -> bool {
        self.target_present
    }
}

impl World for StubWorld {
    fn find_target(&self) -> Option<EntityRef> {
        self.target_present.then_some(EntityRef(1))
    }
}

/// Print a one-screen summary of the encounter.
pub fn print_status(boss: &BossEncounter) {
    let health = boss.health();
    println!("{} [{}]", boss.definition().name, boss.state());
    println!(
        "  health  {}/{} ({:.0}%)",
        health.current(),
        health.max(),
        health.fraction() * 100.0
    );
    println!("  phase   {} ({})", boss.phase_index(), boss.phase_name());
    println!("  clock   {:.2}s", boss.combat_time_secs());

    match boss.scheduler().active_task() {
        Some(task) if task.sequence().is_empty() => {
            println!("  attack  passive (empty loop)");
        }
        Some(task) => {
            let looping = if task.sequence().looping {
                " (looping)"
            } else {
                ""
            };
            println!(
                "  attack  step {}/{}, next in {:.2}s{}",
                task.cursor() + 1,
                task.sequence().len(),
                task.remaining_wait_secs(),
                looping,
            );
        }
        None => println!("  attack  none"),
    }

    if health.defense_active() {
        println!("  guard   active");
    }
}
