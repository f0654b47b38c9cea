//! Copy-to-clipboard control.

use std::time::{Duration, Instant};

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied ✓";

/// How long the confirmation label stays up after a press.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(1500);

/// System clipboard, write-only. Writes are fire-and-forget: an implementation
/// swallows its own failures.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

impl<T: Clipboard + ?Sized> Clipboard for Box<T> {
    fn write_text(&mut self, text: &str) {
        (**self).write_text(text);
    }
}

/// Clipboard that keeps every write in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) {
        self.writes.push(text.to_string());
    }
}

/// Label state of the copy button.
///
/// A press shows the confirmation label; it reverts once
/// [`FEEDBACK_DURATION`] has elapsed since the most recent press. A new press
/// restarts the window instead of queueing a second revert.
#[derive(Debug, Default, Clone, Copy)]
pub struct CopyFeedback {
    pressed_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    pub fn is_confirming(&self, now: Instant) -> bool {
        match self.pressed_at {
            Some(at) => now.saturating_duration_since(at) < FEEDBACK_DURATION,
            None => false,
        }
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_confirming(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
