//! Live reload of the key file.
//!
//! File-system notifications are turned into [`WatchEvent`]s and sent over a
//! channel. One consumer (`ConfigWatcher::run`) drains it on the calling
//! thread, so reloads never overlap and always happen in order.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use notify::{RecommendedWatcher, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEventKind, Debouncer};

use crate::keyfile::ConfigDocument;

/// What the file system told us about the key file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// Writes have finished; the file is safe to read.
    Settled,
    /// The file is still being written.
    Writing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Nothing has been loaded successfully yet.
    Idle,
    Loaded,
    Reloading,
}

/// Watches one key file and hands out fresh documents when it changes.
pub struct ConfigWatcher {
    path: PathBuf,
    state: WatchState,
    receiver: Receiver<WatchEvent>,
    /// Keeps the file-system watch alive. `None` when fed by hand.
    debouncer: Option<Debouncer<RecommendedWatcher>>,
}

impl ConfigWatcher {
    /// Start watching `path` for changes.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors which save by replacing the file are still picked up.
    pub fn spawn(path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let file_name = path.file_name().map(|n| n.to_os_string());
        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let mut debouncer = new_debouncer(
            crate::constants::settings::WATCH_DEBOUNCE,
            move |res: DebounceEventResult| match res {
                Ok(events) => {
                    for event in &events {
                        if event.path.file_name() != file_name.as_deref() {
                            continue;
                        }
                        let mapped = match event.kind {
                            DebouncedEventKind::AnyContinuous => WatchEvent::Writing,
                            _ => WatchEvent::Settled,
                        };
                        let _ = tx.send(mapped);
                    }
                }
                Err(e) => tracing::warn!("Config watch error: {:?}", e),
            },
        )?;

        debouncer
            .watcher()
            .watch(&watch_dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching config file: {:?}", path);
        Ok(Self {
            path: path.to_path_buf(),
            state: WatchState::Idle,
            receiver: rx,
            debouncer: Some(debouncer),
        })
    }

    /// Like [`spawn`](Self::spawn), but a watch that cannot be set up only
    /// disables live reload. `run` then returns at once.
    pub fn spawn_or_static(path: &Path) -> Self {
        match Self::spawn(path) {
            Ok(watcher) => watcher,
            Err(e) => {
                tracing::warn!(
                    "Could not watch config file {:?}: {}; live reload disabled",
                    path,
                    e
                );
                let (watcher, _) = Self::with_channel(path);
                watcher
            }
        }
    }

    /// True while file-system changes are being watched.
    pub fn is_live(&self) -> bool {
        self.debouncer.is_some()
    }

    /// A watcher fed through the returned sender instead of the file system.
    pub fn with_channel(path: &Path) -> (Self, Sender<WatchEvent>) {
        let (tx, rx) = mpsc::channel();
        let watcher = Self {
            path: path.to_path_buf(),
            state: WatchState::Idle,
            receiver: rx,
            debouncer: None,
        };
        (watcher, tx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// First load. Falls back to an empty document (all defaults) on failure.
    pub fn load_initial(&mut self) -> ConfigDocument {
        match ConfigDocument::load(&self.path) {
            Ok(document) => {
                self.state = WatchState::Loaded;
                tracing::info!("Loaded config from {:?}", self.path);
                document
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::info!("No config at {:?}, using defaults", self.path);
                } else {
                    tracing::warn!("{}; using defaults", e);
                }
                ConfigDocument::default()
            }
        }
    }

    /// Run one transition. Returns the new document when a reload succeeded.
    ///
    /// A failed reload returns `None` so the caller keeps its current state.
    pub fn handle(&mut self, event: WatchEvent) -> Option<ConfigDocument> {
        match event {
            WatchEvent::Writing => {
                tracing::debug!("Config file still being written, waiting");
                None
            }
            WatchEvent::Settled => {
                let previous = self.state;
                self.state = WatchState::Reloading;
                match ConfigDocument::load(&self.path) {
                    Ok(document) => {
                        self.state = WatchState::Loaded;
                        tracing::info!("Config file changed, reloading...");
                        Some(document)
                    }
                    Err(e) => {
                        self.state = previous;
                        tracing::warn!("{}; keeping current settings", e);
                        None
                    }
                }
            }
        }
    }

    /// Drain events until every sender is gone, calling `on_reload` for
    /// each successful reload. Returns the number of reloads.
    ///
    /// Queued events are coalesced: a backlog containing any `Settled`
    /// produces a single reload of whatever is on disk now.
    pub fn run(&mut self, mut on_reload: impl FnMut(&ConfigDocument)) -> usize {
        let mut reloads = 0;
        while let Ok(first) = self.receiver.recv() {
            let mut event = first;
            while let Ok(next) = self.receiver.try_recv() {
                if next == WatchEvent::Settled {
                    event = WatchEvent::Settled;
                }
            }

            if let Some(document) = self.handle(event) {
                on_reload(&document);
                reloads += 1;
            }
        }
        tracing::debug!("Config watch channel closed");
        reloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn setup(initial: Option<&str>) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("btermrc");
        if let Some(text) = initial {
            std::fs::write(&path, text).unwrap();
        }
        (dir, path)
    }

    #[test]
    fn starts_idle() {
        let (_dir, path) = setup(None);
        let (watcher, _tx) = ConfigWatcher::with_channel(&path);
        assert_eq!(watcher.state(), WatchState::Idle);
        assert_eq!(watcher.path(), path.as_path());
    }

    #[test]
    fn initial_load_moves_to_loaded() {
        let (_dir, path) = setup(Some("[general]\nallow_bold = true\n"));
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);

        let doc = watcher.load_initial();

        assert_eq!(watcher.state(), WatchState::Loaded);
        assert_eq!(doc.get("general", "allow_bold"), Some("true"));
    }

    #[test]
    fn missing_file_gives_empty_document_and_stays_idle() {
        let (_dir, path) = setup(None);
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);

        let doc = watcher.load_initial();

        assert!(doc.is_empty());
        assert_eq!(watcher.state(), WatchState::Idle);
    }

    #[test]
    fn malformed_file_gives_empty_document() {
        let (_dir, path) = setup(Some("not a key file\n"));
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);

        assert!(watcher.load_initial().is_empty());
        assert_eq!(watcher.state(), WatchState::Idle);
    }

    #[test]
    fn writing_events_are_ignored() {
        let (_dir, path) = setup(Some("[general]\n"));
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);
        watcher.load_initial();

        assert!(watcher.handle(WatchEvent::Writing).is_none());
        assert_eq!(watcher.state(), WatchState::Loaded);
    }

    #[test]
    fn settled_event_reloads_from_disk() {
        let (_dir, path) = setup(Some("[general]\nallow_bold = false\n"));
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);
        watcher.load_initial();

        std::fs::write(&path, "[general]\nallow_bold = true\n").unwrap();
        let doc = watcher.handle(WatchEvent::Settled).unwrap();

        assert_eq!(doc.get("general", "allow_bold"), Some("true"));
        assert_eq!(watcher.state(), WatchState::Loaded);
    }

    #[test]
    fn settled_event_after_idle_start_loads() {
        let (_dir, path) = setup(None);
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);
        watcher.load_initial();

        std::fs::write(&path, "[cursor]\nshape = ibeam\n").unwrap();
        let doc = watcher.handle(WatchEvent::Settled).unwrap();

        assert_eq!(doc.get("cursor", "shape"), Some("ibeam"));
        assert_eq!(watcher.state(), WatchState::Loaded);
    }

    #[test]
    fn failed_reload_keeps_previous_state() {
        let (_dir, path) = setup(Some("[general]\n"));
        let (mut watcher, _tx) = ConfigWatcher::with_channel(&path);
        watcher.load_initial();

        std::fs::write(&path, "garbage\n").unwrap();
        assert!(watcher.handle(WatchEvent::Settled).is_none());
        assert_eq!(watcher.state(), WatchState::Loaded);
    }

    #[test]
    fn run_drains_channel_and_coalesces_backlog() {
        let (_dir, path) = setup(Some("[fonts]\nscale = 1.5\n"));
        let (mut watcher, tx) = ConfigWatcher::with_channel(&path);
        watcher.load_initial();

        tx.send(WatchEvent::Writing).unwrap();
        tx.send(WatchEvent::Settled).unwrap();
        tx.send(WatchEvent::Settled).unwrap();
        drop(tx);

        let mut seen = Vec::new();
        let reloads = watcher.run(|doc| seen.push(doc.get("fonts", "scale").map(str::to_string)));

        assert_eq!(reloads, 1);
        assert_eq!(seen, vec![Some("1.5".to_string())]);
    }

    #[test]
    fn run_without_settle_never_reloads() {
        let (_dir, path) = setup(Some("[general]\n"));
        let (mut watcher, tx) = ConfigWatcher::with_channel(&path);

        tx.send(WatchEvent::Writing).unwrap();
        tx.send(WatchEvent::Writing).unwrap();
        drop(tx);

        let reloads = watcher.run(|_| panic!("no reload expected"));
        assert_eq!(reloads, 0);
    }

    #[test]
    fn spawn_watches_existing_directory() {
        let (_dir, path) = setup(Some("[general]\n"));
        let watcher = ConfigWatcher::spawn(&path).unwrap();
        assert_eq!(watcher.state(), WatchState::Idle);
        assert!(watcher.is_live());
    }

    #[test]
    fn spawn_fails_without_directory() {
        let (dir, _) = setup(None);
        let path = dir.path().join("no-such-dir").join("btermrc");
        assert!(ConfigWatcher::spawn(&path).is_err());
    }

    #[test]
    fn unwatchable_path_still_loads_defaults() {
        let (dir, _) = setup(None);
        let path = dir.path().join("no-such-dir").join("btermrc");

        let mut watcher = ConfigWatcher::spawn_or_static(&path);

        assert!(!watcher.is_live());
        assert!(watcher.load_initial().is_empty());
        assert_eq!(watcher.state(), WatchState::Idle);
        // No event source, so the loop ends instead of blocking.
        assert_eq!(watcher.run(|_| panic!("no reload expected")), 0);
    }

    #[test]
    #[tracing_test::traced_test]
    fn unwatchable_path_is_logged() {
        let (dir, _) = setup(None);
        let path = dir.path().join("no-such-dir").join("btermrc");

        let _watcher = ConfigWatcher::spawn_or_static(&path);

        assert!(logs_contain("live reload disabled"));
    }
}
