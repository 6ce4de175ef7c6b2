//! Application model: what the UI needs to render a frame.
//!
//! The engine owns all playback state; the `App` only holds the shared view
//! handle plus a few presentation-side details.

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::{PlayerView, ViewHandle};

pub struct App {
    pub view: ViewHandle,
    /// Folder the track pool was scanned from, if any.
    pub current_dir: Option<PathBuf>,
    /// One-line feedback for the last key press (e.g. rescan results).
    /// Cleared by the next key press.
    pub notice: Option<String>,
}

impl App {
    pub fn new(view: ViewHandle) -> Self {
        Self {
            view,
            current_dir: None,
            notice: None,
        }
    }

    /// Record the music folder in the app state.
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = Some(dir);
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Copy of the engine's latest published view.
    pub fn snapshot(&self) -> PlayerView {
        self.view
            .lock()
            .map(|v| v.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total`, or `00:00 / 00:00` while nothing with a length is playing.
pub fn timer_text(elapsed: Duration, total: Option<Duration>) -> String {
    match total.filter(|t| !t.is_zero()) {
        Some(t) => format!("{} / {}", format_mmss(elapsed), format_mmss(t)),
        None => "00:00 / 00:00".to_string(),
    }
}

/// Fraction of the source played, in `0.0..=1.0`.
pub fn progress_ratio(elapsed: Duration, total: Option<Duration>) -> f64 {
    match total.filter(|t| !t.is_zero()) {
        Some(t) => (elapsed.as_secs_f64() / t.as_secs_f64()).clamp(0.0, 1.0),
        None => 0.0,
    }
}
