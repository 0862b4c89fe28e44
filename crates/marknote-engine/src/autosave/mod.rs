//! Idle-delay autosave.
//!
//! [`AutosaveTimer`] decides *when* to save: every observed change
//! restarts a countdown, and the value is handed out for persistence only
//! once the countdown elapses with no further change (pure trailing
//! debounce, no leading-edge save). [`AutosaveStore`] is *where* it goes:
//! a single record file, overwritten in place. Loading is pull-only - the
//! shell asks for the last record explicitly, it is never pushed back.
//!
//! On teardown a pending countdown is dropped without a final save;
//! content still inside the idle window is lost by design.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Default idle delay before a changed document is persisted.
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
#[error("Failed to write autosave record at {path}: {source}")]
pub struct AutosaveError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Countdown state machine for idle autosave.
///
/// Pure: driven entirely by the `Instant`s passed in, so the idle-window
/// properties are testable without real timers.
#[derive(Debug, Clone)]
pub struct AutosaveTimer {
    delay: Duration,
    last_saved: String,
    pending: Option<Pending>,
}

impl AutosaveTimer {
    /// `initial` seeds the last-saved marker: the document as loaded is
    /// not re-saved until it changes.
    pub fn new(delay: Duration, initial: &str) -> Self {
        Self {
            delay,
            last_saved: initial.to_string(),
            pending: None,
        }
    }

    /// Observe the current document value at `now`.
    ///
    /// A value that differs from the last-saved one (re)starts the
    /// countdown; restarting cancels any prior pending countdown. A value
    /// equal to the last-saved one cancels outright - reverting an edit
    /// within the idle window saves nothing.
    pub fn observe(&mut self, value: &str, now: Instant) {
        self.pending = None;
        if value != self.last_saved {
            self.pending = Some(Pending {
                value: value.to_string(),
                deadline: now + self.delay,
            });
        }
    }

    /// When the shell's autosave timer should next fire, if a save is
    /// pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// If the countdown has elapsed, yield the value to persist and mark
    /// it saved. Each elapsed countdown yields exactly once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {}
            _ => return None,
        }

        let Pending { value, .. } = self.pending.take().expect("pending checked above");
        self.last_saved = value.clone();
        Some(value)
    }

    /// Teardown hook: drop a pending countdown without saving.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Single-record persistence for the autosaved document.
#[derive(Debug, Clone)]
pub struct AutosaveStore {
    path: PathBuf,
}

impl AutosaveStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the record with `content`, creating parent directories
    /// on first save.
    pub fn save(&self, content: &str) -> Result<(), AutosaveError> {
        let wrap = |source| AutosaveError {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
        fs::write(&self.path, content).map_err(wrap)
    }

    /// Read the last autosaved record. `None` when no record exists or
    /// storage is unreadable - callers treat both as "nothing to restore".
    pub fn load_last(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const DELAY: Duration = DEFAULT_AUTOSAVE_DELAY;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn rapid_edits_persist_only_the_final_value_once() {
        let base = Instant::now();
        let mut timer = AutosaveTimer::new(DELAY, "");

        timer.observe("a", at(base, 0));
        timer.observe("ab", at(base, 500));
        timer.observe("abc", at(base, 1000));

        // Countdown restarted at t=1000; nothing is due at t=2500
        assert_eq!(timer.poll(at(base, 2500)), None);

        // The final value saves once the delay elapses from the last change
        assert_eq!(timer.poll(at(base, 3000)), Some("abc".to_string()));

        // And exactly once
        assert_eq!(timer.poll(at(base, 9000)), None);
    }

    #[test]
    fn unchanged_value_starts_no_countdown() {
        let base = Instant::now();
        let mut timer = AutosaveTimer::new(DELAY, "loaded");

        timer.observe("loaded", at(base, 0));
        assert!(timer.next_deadline().is_none());
        assert_eq!(timer.poll(at(base, 10_000)), None);
    }

    #[test]
    fn reverting_within_the_window_cancels_the_pending_save() {
        let base = Instant::now();
        let mut timer = AutosaveTimer::new(DELAY, "original");

        timer.observe("edited", at(base, 0));
        timer.observe("original", at(base, 1000));

        assert!(timer.next_deadline().is_none());
        assert_eq!(timer.poll(at(base, 10_000)), None);
    }

    #[test]
    fn saved_marker_advances_so_the_same_value_is_not_saved_twice() {
        let base = Instant::now();
        let mut timer = AutosaveTimer::new(DELAY, "");

        timer.observe("v1", at(base, 0));
        assert_eq!(timer.poll(at(base, 2000)), Some("v1".to_string()));

        // Observing the now-saved value again is a no-op
        timer.observe("v1", at(base, 3000));
        assert_eq!(timer.poll(at(base, 10_000)), None);

        // A genuinely new value saves again
        timer.observe("v2", at(base, 11_000));
        assert_eq!(timer.poll(at(base, 13_000)), Some("v2".to_string()));
    }

    #[test]
    fn cancel_drops_the_countdown_without_saving() {
        let base = Instant::now();
        let mut timer = AutosaveTimer::new(DELAY, "");

        timer.observe("unsaved", at(base, 0));
        timer.cancel();

        assert_eq!(timer.poll(at(base, 10_000)), None);
    }

    #[test]
    fn store_roundtrip_overwrites_in_place() {
        let dir = TempDir::new().unwrap();
        let store = AutosaveStore::new(dir.path().join("autosave.md"));

        store.save("first").unwrap();
        assert_eq!(store.load_last().as_deref(), Some("first"));

        store.save("second").unwrap();
        assert_eq!(store.load_last().as_deref(), Some("second"));
    }

    #[test]
    fn store_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = AutosaveStore::new(dir.path().join("state/deep/autosave.md"));

        store.save("content").unwrap();
        assert_eq!(store.load_last().as_deref(), Some("content"));
    }

    #[test]
    fn load_without_a_record_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = AutosaveStore::new(dir.path().join("missing.md"));
        assert_eq!(store.load_last(), None);
    }
}
