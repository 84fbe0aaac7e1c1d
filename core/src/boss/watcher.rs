//! Definition pack hot reload
//!
//! Watches a pack directory and reports TOML changes so a host can
//! re-run `load_definitions` while the game is up. Reload is pull-based:
//! the watcher only reports paths, it never parses. Running encounters
//! keep the definition they spawned with; reloads affect later spawns.

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc::{self, Receiver};

use super::BossError;

/// A change inside a watched pack directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionEvent {
    /// A definition file appeared or changed content.
    Changed(PathBuf),
    /// A definition file went away.
    Removed(PathBuf),
    /// The underlying watcher reported an error.
    Error(String),
}

/// Watches one pack directory for definition changes.
pub struct DefinitionWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
}

impl DefinitionWatcher {
    pub fn new(dir: &Path) -> Result<Self, BossError> {
        let (tx, rx) = mpsc::channel(100);

        let watch_err = |source| BossError::WatchDirectory {
            path: dir.to_path_buf(),
            source,
        };

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.blocking_send(res);
            },
            Config::default(),
        )
        .map_err(watch_err)?;

        // Packs are flat directories
        watcher.watch(dir, RecursiveMode::NonRecursive).map_err(watch_err)?;

        tracing::info!(dir = %dir.display(), "watching definition pack");
        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait for the next definition change.
    ///
    /// Returns `None` once the watcher backend shuts down.
    pub async fn next_event(&mut self) -> Option<DefinitionEvent> {
        while let Some(event_result) = self.rx.recv().await {
            match event_result {
                Ok(event) => {
                    if let Some(definition_event) = process_event(event) {
                        return Some(definition_event);
                    }
                }
                Err(e) => {
                    return Some(DefinitionEvent::Error(format!("definition watcher error: {e}")));
                }
            }
        }
        None
    }

    /// Drain one pending change without waiting, if any.
    pub fn try_next(&mut self) -> Option<DefinitionEvent> {
        while let Ok(event_result) = self.rx.try_recv() {
            match event_result {
                Ok(event) => {
                    if let Some(definition_event) = process_event(event) {
                        return Some(definition_event);
                    }
                }
                Err(e) => {
                    return Some(DefinitionEvent::Error(format!("definition watcher error: {e}")));
                }
            }
        }
        None
    }
}

fn process_event(event: Event) -> Option<DefinitionEvent> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            event.paths.into_iter().find(|p| is_definition_file(p)).map(|path| {
                tracing::debug!(path = %path.display(), "definition file changed");
                DefinitionEvent::Changed(path)
            })
        }
        EventKind::Remove(_) => event
            .paths
            .into_iter()
            .find(|p| is_definition_file(p))
            .map(DefinitionEvent::Removed),
        _ => None,
    }
}

fn is_definition_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    #[test]
    fn test_create_maps_to_changed() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/packs/warden.toml"));
        assert_eq!(
            process_event(event),
            Some(DefinitionEvent::Changed(PathBuf::from("/packs/warden.toml")))
        );
    }

    #[test]
    fn test_modify_maps_to_changed() {
        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/packs/warden.toml"));
        assert!(matches!(
            process_event(event),
            Some(DefinitionEvent::Changed(_))
        ));
    }

    #[test]
    fn test_remove_maps_to_removed() {
        let event = Event::new(EventKind::Remove(RemoveKind::File))
            .add_path(PathBuf::from("/packs/warden.toml"));
        assert_eq!(
            process_event(event),
            Some(DefinitionEvent::Removed(PathBuf::from("/packs/warden.toml")))
        );
    }

    #[test]
    fn test_non_toml_paths_filtered() {
        let event = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/packs/readme.md"));
        assert_eq!(process_event(event), None);
    }

    #[test]
    fn test_other_event_kinds_ignored() {
        let event =
            Event::new(EventKind::Access(notify::event::AccessKind::Any)).add_path(PathBuf::from("/packs/warden.toml"));
        assert_eq!(process_event(event), None);
    }
}
