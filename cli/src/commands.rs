use std::path::PathBuf;

use tyrant_core::boss::load_definitions;
use tyrant_core::pattern::PatternId;
use tyrant_core::script::parse_script;

use crate::context::EncounterSession;
use crate::{CliContext, console, pack_watcher};

/// Load (or reload) the definition pack. `--dir` loads a one-shot
/// directory without touching the configured one.
pub async fn load_pack(dir: Option<&str>, ctx: &CliContext) {
    let dir = match dir {
        Some(d) => PathBuf::from(d),
        None => ctx.definitions_dir().await,
    };

    match load_definitions(&dir) {
        Ok(bosses) => {
            println!(
                "Loaded {} boss definitions from {}",
                bosses.len(),
                dir.display()
            );
            *ctx.definitions.write().await = bosses;
        }
        Err(e) => println!("{e}"),
    }
}

pub async fn list_bosses(ctx: &CliContext) {
    let definitions = ctx.definitions.read().await;
    if definitions.is_empty() {
        println!("No definitions loaded. Use: load");
        return;
    }

    println!(
        "{:<16} {:<24} {:>8} {:>7} {:>7}",
        "id", "name", "health", "phases", "events"
    );
    println!("{}", "-".repeat(68));
    for boss in definitions.iter() {
        println!(
            "{:<16} {:<24} {:>8} {:>7} {:>7}",
            boss.id,
            boss.name,
            boss.max_health,
            boss.phases.len(),
            boss.events.len()
        );
    }
    println!("\nTotal: {} bosses", definitions.len());
}

pub async fn spawn(id: &str, ctx: &CliContext) {
    let Some(definition) = ctx.find_definition(id).await else {
        println!("No definition with id '{id}'. Try: list");
        return;
    };

    let name = definition.name.clone();
    *ctx.session.write().await = Some(EncounterSession::new(definition));
    println!("Spawned {name}. Use: engage");
}

pub async fn engage(ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };
    session.engage();
}

pub async fn hit(amount: u32, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    let applied = session.hit(amount);
    let health = session.boss.health();
    println!(
        "Hit for {applied} ({}/{} left)",
        health.current(),
        health.max()
    );
}

pub async fn heal(amount: u32, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    if session.boss.regenerate(amount) {
        let health = session.boss.health();
        println!("Regenerated to {}/{}", health.current(), health.max());
    } else {
        println!("Regeneration unavailable (cooldown or defeated)");
    }
}

pub async fn guard(off: bool, duration: f32, reduction: f32, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    if off {
        session.boss.set_defense(false, 0.0, 0.0);
        println!("Guard dropped");
    } else {
        session.boss.set_defense(true, duration, reduction);
        println!(
            "Guarding for {duration:.1}s at {:.0}% reduction",
            reduction * 100.0
        );
    }
}

pub async fn play_script(text: &str, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    let steps = parse_script(text);
    if steps.is_empty() {
        println!("Script parsed empty; phase choreography resumes");
    } else {
        println!("Playing {} steps (looping)", steps.len());
    }
    session.boss.play_script(text);
}

pub async fn play_pattern(id: u16, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    session.boss.play_pattern(PatternId(id));
    println!("Pattern {id} playing");
}

pub async fn cancel(ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };
    session.cancel();
}

/// Advance simulated time, printing the timeline as it goes.
pub async fn run(secs: f32, ctx: &CliContext) {
    let tick = ctx.config.read().await.tick_secs.max(0.001);

    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    let ticks = (secs / tick).ceil() as u32;
    for _ in 0..ticks {
        session.tick(tick);
    }
    println!("Advanced {:.2}s in {ticks} ticks", ticks as f32 * tick);
}

pub async fn step(count: u32, ctx: &CliContext) {
    let tick = ctx.config.read().await.tick_secs.max(0.001);

    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    for _ in 0..count {
        session.tick(tick);
    }
}

pub async fn status(ctx: &CliContext) {
    let session = ctx.session.read().await;
    match session.as_ref() {
        Some(session) => console::print_status(&session.boss),
        None => println!("No boss spawned"),
    }
}

pub async fn set_target(off: bool, ctx: &CliContext) {
    let mut session = ctx.session.write().await;
    let Some(session) = session.as_mut() else {
        println!("No boss spawned. Use: spawn --id <boss>");
        return;
    };

    session.world.set_target(!off);
    if off {
        println!("Target cleared; aiming steps will skip");
    } else {
        println!("Target present (entity#1)");
    }
}

pub async fn show_config(ctx: &CliContext) {
    let config = ctx.config.read().await;
    println!("definitions_dir = {}", config.definitions_dir);
    println!("tick_secs       = {}", config.tick_secs);
}

pub async fn set_directory(path: &str, ctx: &CliContext) {
    let dir = PathBuf::from(path);
    if !(dir.exists() && dir.is_dir()) {
        println!("Update failed. Invalid directory name given.");
        return;
    }

    {
        let mut config = ctx.config.write().await;
        if config.definitions_dir == path {
            println!("Definitions directory already set to {path}");
            return;
        }
        config.definitions_dir = path.to_string();
        config.save();
    }

    // Stop the old watcher before pointing at the new directory
    {
        let mut tasks = ctx.tasks.lock().await;
        if let Some(watcher) = tasks.watcher.take() {
            watcher.abort();
        }
    }

    load_pack(None, ctx).await;
    if let Some(handle) = pack_watcher::init_watcher(ctx).await {
        ctx.tasks.lock().await.watcher = Some(handle);
    }
}

pub fn exit() {
    println!("quitting...");
}
