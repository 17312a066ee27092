// Copyright 2025 the Higher Plane Authors
// SPDX-License-Identifier: Apache-2.0

//! Filesystem watcher that reloads the open document when it changes.
//!
//! Uses the `notify` crate (OS-native events: FSEvents on macOS, inotify on
//! Linux). The document's parent directory is watched rather than the file
//! itself: editors that save by writing a temp file and renaming it over the
//! original would otherwise drop the watch. Bursts of events are debounced.
//!
//! One task runs for the whole session. It follows a shared [`WatchTarget`]
//! and re-targets the OS watcher when a different document is opened.

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use xilem::core::MessageProxy;
use xilem::tokio;
use xilem::tokio::sync::mpsc;

use crate::settings;

/// How often the task checks whether the target changed
const RETARGET_POLL: Duration = Duration::from_millis(500);

/// Message sent when the watched document changed on disk.
#[derive(Debug)]
pub struct DocumentChanged;

/// The file the watcher should follow, shared with the app state
#[derive(Debug, Clone, Default)]
pub struct WatchTarget(Arc<Mutex<Option<PathBuf>>>);

impl WatchTarget {
    pub fn set(&self, path: Option<PathBuf>) {
        let mut target = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *target = path;
    }

    pub fn get(&self) -> Option<PathBuf> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// Follow `target` and send `DocumentChanged` through the Xilem proxy after
/// each burst of changes to the targeted file settles.
pub async fn watch_document(proxy: MessageProxy<DocumentChanged>, target: WatchTarget) {
    let (tx, mut rx) = mpsc::channel::<Event>(64);
    let debounce = Duration::from_millis(settings::watch::DEBOUNCE_MS);

    let mut current: Option<PathBuf> = None;
    // Dropping the watcher stops the OS watch
    let mut watcher: Option<RecommendedWatcher> = None;

    loop {
        let wanted = target.get();
        if wanted != current {
            watcher = wanted.as_deref().and_then(|path| start_watcher(path, tx.clone()));
            current = wanted;
            // Events from the previous file are stale
            while rx.try_recv().is_ok() {}
        }

        let first = match tokio::time::timeout(RETARGET_POLL, rx.recv()).await {
            Ok(Some(event)) => event,
            Ok(None) => return,
            Err(_) => continue,
        };
        tracing::debug!("File event {:?} on {:?}", first.kind, first.paths);

        // Wait for a quiet period
        loop {
            match tokio::time::timeout(debounce, rx.recv()).await {
                Ok(Some(_)) => continue,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        // The document may have been switched while debouncing
        if target.get() != current {
            continue;
        }

        if let Some(path) = &current {
            tracing::info!("{} changed on disk, reloading", path.display());
        }
        if proxy.message(DocumentChanged).is_err() {
            break;
        }
    }

    drop(watcher);
}

/// Start an OS watcher for `document`, forwarding its create/modify events
fn start_watcher(document: &Path, tx: mpsc::Sender<Event>) -> Option<RecommendedWatcher> {
    let Some(directory) = document.parent() else {
        tracing::warn!("Not watching {}: no parent directory", document.display());
        return None;
    };
    // `parent()` of a bare file name is the empty path
    let directory = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };
    let file_name: Option<OsString> = document.file_name().map(|name| name.to_os_string());

    let mut watcher = match notify::recommended_watcher(
        move |result: Result<Event, notify::Error>| {
            if let Ok(event) = result {
                use notify::EventKind::*;
                let touches_document = event
                    .paths
                    .iter()
                    .any(|path| path.file_name().map(|n| n.to_os_string()) == file_name);
                if touches_document && matches!(event.kind, Create(_) | Modify(_)) {
                    let _ = tx.blocking_send(event);
                }
            }
        },
    ) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to create file watcher: {}", e);
            return None;
        }
    };

    if let Err(e) = watcher.watch(directory, RecursiveMode::NonRecursive) {
        tracing::error!("Failed to watch {}: {}", directory.display(), e);
        return None;
    }
    tracing::info!("Watching for external changes: {}", document.display());
    Some(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_is_shared_between_clones() {
        let target = WatchTarget::default();
        let other = target.clone();
        assert!(other.get().is_none());
        target.set(Some(PathBuf::from("/tmp/doc.txt")));
        assert_eq!(other.get(), Some(PathBuf::from("/tmp/doc.txt")));
        other.set(None);
        assert!(target.get().is_none());
    }
}
