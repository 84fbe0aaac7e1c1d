use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tyrant_core::BossEncounter;
use tyrant_core::boss::BossDefinition;
use tyrant_core::pattern::PatternRegistry;

use crate::config::CliConfig;
use crate::console::{ConsoleSkin, StubWorld};

/// Holds all shared state for the console.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<CliConfig>>,
    /// Loaded definition pack, merged by boss id. Swapped wholesale on
    /// reload; a running session keeps the definition it spawned with.
    pub definitions: Arc<RwLock<Vec<BossDefinition>>>,
    /// The live encounter. None until `spawn`.
    pub session: Arc<RwLock<Option<EncounterSession>>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(CliConfig::load())),
            definitions: Arc::new(RwLock::new(Vec::new())),
            session: Arc::new(RwLock::new(None)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }

    pub async fn definitions_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.read().await.definitions_dir)
    }

    pub async fn find_definition(&self, id: &str) -> Option<BossDefinition> {
        self.definitions
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}

/// One spawned boss plus the console skin and stub world it runs against.
pub struct EncounterSession {
    pub boss: BossEncounter,
    pub skin: ConsoleSkin,
    pub world: StubWorld,
}

impl EncounterSession {
    pub fn new(definition: BossDefinition) -> Self {
        Self {
            boss: BossEncounter::new(definition, PatternRegistry::with_builtins()),
            skin: ConsoleSkin::new(),
            world: StubWorld::new(),
        }
    }

    fn sync_clock(&mut self) {
        self.skin.set_clock(self.boss.combat_time_secs());
    }

    /// Advance simulated time by one tick.
    pub fn tick(&mut self, dt: f32) {
        self.sync_clock();
        self.boss.tick(dt, &self.world, &mut self.skin);
    }

    pub fn engage(&mut self) {
        self.sync_clock();
        self.boss.engage(&mut self.skin);
    }

    pub fn hit(&mut self, amount: u32) -> u32 {
        self.sync_clock();
        self.boss.apply_damage(amount, &mut self.skin)
    }

    pub fn cancel(&mut self) {
        self.sync_clock();
        self.boss.cancel_attack(&mut self.skin);
    }
}

#[derive(Default)]
pub struct BackgroundTasks {
    pub watcher: Option<JoinHandle<()>>,
}
