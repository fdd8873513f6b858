// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for hot-reload configuration.
//!
//! Edits to a view file are debounced, reloaded and resolved on a
//! background thread. Only files that load and resolve cleanly are
//! delivered as `Reloaded`; everything else arrives as `Error`.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use super::ViewFile;

/// Events emitted by the config watcher
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// View file was modified and successfully reloaded
    Reloaded(Box<ViewFile>),
    /// View file was modified but failed to load or resolve
    Error(String),
    /// A new file was created in the watch directory
    FileCreated(PathBuf),
    /// A file was deleted from the watch directory
    FileDeleted(PathBuf),
}

/// Configuration file watcher with debouncing and validation
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<ConfigEvent>,
    watched_path: PathBuf,
}

fn is_config_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml" | "toml")
    )
}

fn reload(path: &Path) -> ConfigEvent {
    match validate_config(path) {
        Ok(config) => {
            info!(path = ?path, "reloaded view configuration");
            ConfigEvent::Reloaded(Box::new(config))
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "failed to reload view configuration");
            ConfigEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

impl ConfigWatcher {
    /// Create a new config watcher for the specified path
    ///
    /// # Arguments
    /// * `path` - Path to watch (file or directory)
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<ConfigEvent>, Receiver<ConfigEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;
        debug!(path = ?watched_path, ?mode, "watching view configuration");

        let target = watched_path.clone();
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending_paths: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Create(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ConfigEvent::FileCreated(path));
                            }
                        }
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ConfigEvent::FileDeleted(path));
                            }
                        }
                        EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending_paths.contains(&path) {
                                    pending_paths.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let settled = last_event_time
                            .is_some_and(|last| last.elapsed() >= debounce_duration);
                        if settled {
                            for path in pending_paths.drain(..) {
                                // The watched file itself is reloaded whatever its extension
                                if is_config_file(&path) || path == target {
                                    let _ = event_tx.send(reload(&path));
                                }
                            }
                            last_event_time = None;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next config event (non-blocking)
    pub fn try_recv(&self) -> Option<ConfigEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending config events
    pub fn recv_all(&self) -> Vec<ConfigEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next config event is received
    pub fn recv(&self) -> Option<ConfigEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

/// Load and resolve a view file without applying it
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<ViewFile> {
    let config = ViewFile::load(path)?;
    config.view.resolve()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("view.yaml");

        let yaml = r#"
view:
  key: "A"
  mode: aeolian
  fret_count: 12
"#;

        fs::write(&file_path, yaml).unwrap();

        let config = validate_config(&file_path).unwrap();
        assert_eq!(config.view.key, "A");
        assert_eq!(config.view.fret_count, 12);
    }

    #[test]
    fn test_validate_toml_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("view.toml");

        fs::write(&file_path, "[view]\nkey = \"F#\"\nmode = \"lydian\"\n").unwrap();

        let config = validate_config(&file_path).unwrap();
        assert_eq!(config.view.mode, "lydian");
    }

    #[test]
    fn test_validate_invalid_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("invalid.yaml");

        fs::write(&file_path, "this is not valid yaml: [").unwrap();
        assert!(validate_config(&file_path).is_err());

        // Parses, but the key does not resolve
        fs::write(&file_path, "view:\n  key: \"Q\"\n").unwrap();
        assert!(validate_config(&file_path).is_err());
    }

    #[test]
    fn test_reload_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("reload.yaml");
        fs::write(&file_path, "view:\n  key: \"G\"\n  mode: mixolydian\n").unwrap();

        match reload(&file_path) {
            ConfigEvent::Reloaded(config) => {
                assert_eq!(config.view.key, "G");
                assert_eq!(config.view.mode, "mixolydian");
            }
            other => panic!("expected Reloaded, got {:?}", other),
        }
    }

    #[test]
    fn test_reload_unresolvable_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("reload.yaml");

        // Parses, but Q is not a key
        fs::write(&file_path, "view:\n  key: \"Q\"\n").unwrap();
        match reload(&file_path) {
            ConfigEvent::Error(message) => assert!(message.contains("unknown key")),
            other => panic!("expected Error, got {:?}", other),
        }

        fs::write(&file_path, "view: [").unwrap();
        assert!(matches!(reload(&file_path), ConfigEvent::Error(_)));
    }

    #[test]
    fn test_is_config_file() {
        assert!(is_config_file(Path::new("view.yaml")));
        assert!(is_config_file(Path::new("view.yml")));
        assert!(is_config_file(Path::new("view.toml")));
        assert!(!is_config_file(Path::new("view.txt")));
        assert!(!is_config_file(Path::new("view")));
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("watch_test.yaml");
        fs::write(&file_path, "view:\n  key: \"D\"\n").unwrap();

        let watcher = ConfigWatcher::new(dir.path(), Some(100));
        assert!(watcher.is_ok());

        let watcher = watcher.unwrap();
        assert_eq!(watcher.watched_path(), dir.path());
    }
}
