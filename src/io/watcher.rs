use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use tracing::{debug, warn};

/// Watches one directory (non-recursively) and reports that it changed.
pub struct DirectoryWatcher {
    watcher: RecommendedWatcher,
    watched: Option<PathBuf>,
    changes: Receiver<()>,
}

impl DirectoryWatcher {
    pub fn new<W>(wake: W) -> notify::Result<Self>
    where
        W: Fn() + Send + 'static,
    {
        let (tx, changes) = channel();
        let watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            // Opening the directory to list it raises access events; only
            // content changes count.
            if res.is_ok_and(|e| !e.kind.is_access()) && tx.send(()).is_ok() {
                wake();
            }
        })?;

        Ok(Self {
            watcher,
            watched: None,
            changes,
        })
    }

    /// Switch the watch to `path`. Failures are logged and leave the pane
    /// unwatched.
    pub fn watch(&mut self, path: &Path) {
        if self.watched.as_deref() == Some(path) {
            return;
        }
        if let Some(old) = self.watched.take() {
            if let Err(e) = self.watcher.unwatch(&old) {
                debug!(path = %old.display(), "cannot unwatch directory: {e}");
            }
        }
        match self.watcher.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => self.watched = Some(path.to_path_buf()),
            Err(e) => warn!(path = %path.display(), "cannot watch directory: {e}"),
        }
        // Drop anything queued for the previous directory
        while self.changes.try_recv().is_ok() {}
    }

    /// Whether the watched directory changed since the last call.
    pub fn take_change(&self) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{FileSystem, StdFileSystem};
    use std::fs;
    use std::thread;
    use std::time::{Duration, Instant};

    const SETTLE: Duration = Duration::from_millis(300);

    fn wait_for_change(watcher: &DirectoryWatcher) -> bool {
        let deadline = Instant::now() + Duration::from_secs(3);
        while Instant::now() < deadline {
            if watcher.take_change() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        false
    }

    #[test]
    fn test_external_create_is_a_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new(|| {}).unwrap();
        watcher.watch(dir.path());
        thread::sleep(SETTLE);
        watcher.take_change();

        fs::write(dir.path().join("new.txt"), b"x").unwrap();
        assert!(wait_for_change(&watcher));
    }

    #[test]
    fn test_listing_is_not_a_change() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        let mut watcher = DirectoryWatcher::new(|| {}).unwrap();
        watcher.watch(dir.path());
        thread::sleep(SETTLE);
        watcher.take_change();

        StdFileSystem.list_directory(dir.path()).unwrap();
        thread::sleep(SETTLE);
        assert!(!watcher.take_change());

        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(wait_for_change(&watcher));
    }

    #[test]
    fn test_switching_directory_drops_queued_changes() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let mut watcher = DirectoryWatcher::new(|| {}).unwrap();
        watcher.watch(first.path());
        thread::sleep(SETTLE);

        fs::write(first.path().join("queued.txt"), b"q").unwrap();
        thread::sleep(SETTLE);
        watcher.watch(second.path());
        assert!(!watcher.take_change());

        // Re-watching the same directory keeps the watch in place
        watcher.watch(second.path());
        fs::write(second.path().join("seen.txt"), b"s").unwrap();
        assert!(wait_for_change(&watcher));
    }
}
