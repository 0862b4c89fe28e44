//! Debounced preview pipeline.
//!
//! Decouples keystroke-rate text updates from render-rate updates: a
//! trailing debounce holds the latest raw value until the window elapses
//! uninterrupted, and the committed value is memoized so an unchanged
//! commit does no render work. The pipeline is a pure state machine
//! driven by `Instant`s; the shell owns the actual timer and calls
//! [`PreviewPipeline::poll`] when it fires.

use std::time::{Duration, Instant};

use crate::render;

/// Default trailing-debounce window for the preview pane.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending {
    value: String,
    deadline: Instant,
}

/// Raw text stream in, debounced rendered HTML out.
#[derive(Debug, Clone)]
pub struct PreviewPipeline {
    window: Duration,
    pending: Option<Pending>,
    visible: String,
    html: String,
}

impl PreviewPipeline {
    pub fn new(window: Duration, initial: &str) -> Self {
        Self {
            window,
            pending: None,
            visible: initial.to_string(),
            html: render::to_html(initial),
        }
    }

    /// Record a raw text update at `now`, restarting the debounce window.
    /// The previous pending value, if any, is superseded and never becomes
    /// visible.
    pub fn update(&mut self, raw: &str, now: Instant) {
        self.pending = Some(Pending {
            value: raw.to_string(),
            deadline: now + self.window,
        });
    }

    /// When the shell's debounce timer should next fire, if a commit is
    /// pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Commit the pending value if its window has fully elapsed.
    ///
    /// Returns `true` when the visible HTML changed and the consumer must
    /// repaint. A commit that carries the value already visible is
    /// absorbed here - the downstream sees consecutive identical values
    /// as a single one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {}
            _ => return false,
        }

        let Pending { value, .. } = self.pending.take().expect("pending checked above");
        if value == self.visible {
            return false;
        }

        self.visible = value;
        self.html = render::to_html(&self.visible);
        true
    }

    /// The committed (debounced) text value.
    pub fn visible(&self) -> &str {
        &self.visible
    }

    /// Rendered HTML for the committed value.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Teardown hook: drop any pending update so a stale timer firing
    /// after the consuming view is gone cannot commit into it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
