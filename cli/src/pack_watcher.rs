use tokio::task::JoinHandle;
use tyrant_core::boss::{DefinitionEvent, DefinitionWatcher, load_definitions};

use crate::CliContext;

/// Start watching the configured definitions directory.
///
/// Changed files trigger a full pack reload into the shared context;
/// the running session keeps the definition it spawned with.
pub async fn init_watcher(ctx: &CliContext) -> Option<JoinHandle<()>> {
    let dir = ctx.definitions_dir().await;
    if !dir.exists() {
        println!(
            "Definitions directory {} does not exist yet; not watching",
            dir.display()
        );
        return None;
    }

    let mut watcher = match DefinitionWatcher::new(&dir) {
        Ok(w) => w,
        Err(e) => {
            println!("Failed to start definition watcher: {e}");
            return None;
        }
    };

    println!("Watching definitions: {}", dir.display());

    let watcher_ctx = ctx.clone();
    let handle = tokio::spawn(async move {
        while let Some(event) = watcher.next_event().await {
            handle_watcher_event(event, &watcher_ctx).await;
        }
    });

    Some(handle)
}

async fn handle_watcher_event(event: DefinitionEvent, ctx: &CliContext) {
    match event {
        DefinitionEvent::Changed(path) => {
            println!("Definition file changed: {}", path.display());
            reload(ctx).await;
        }
        DefinitionEvent::Removed(path) => {
            println!("Definition file removed: {}", path.display());
            reload(ctx).await;
        }
        DefinitionEvent::Error(msg) => {
            println!("Watcher error: {msg}");
        }
    }
}

async fn reload(ctx: &CliContext) {
    let dir = ctx.definitions_dir().await;
    match load_definitions(&dir) {
        Ok(bosses) => {
            println!(
                "Reloaded {} boss definitions (affects new spawns)",
                bosses.len()
            );
            *ctx.definitions.write().await = bosses;
        }
        Err(e) => println!("Reload failed: {e}"),
    }
}
