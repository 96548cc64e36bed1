//! Reconciliation of the full and partial waveform views.

use crate::view::{Selection, SelectionOrigin, TimeWindow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of the signal the waveform panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewMode {
    /// The whole signal.
    #[default]
    #[serde(rename = "full")]
    FullWaveform,
    /// Only the range shown by the spectrogram.
    #[serde(rename = "partial")]
    PartialWaveform,
}

impl ViewMode {
    /// Origin tag for selections made in this mode.
    pub fn origin(self) -> SelectionOrigin {
        match self {
            Self::FullWaveform => SelectionOrigin::FullView,
            Self::PartialWaveform => SelectionOrigin::PartialView,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullWaveform => write!(f, "full"),
            Self::PartialWaveform => write!(f, "partial"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "full-waveform" => Ok(Self::FullWaveform),
            "partial" | "partial-waveform" | "zoom" => Ok(Self::PartialWaveform),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// Decides which selection bounds are authoritative in each view mode.
///
/// In the full view the selection follows the spectrogram window until the
/// user drags a range; from then on the dragged bounds win until the flag is
/// cleared or a new signal is loaded. The partial view always shows the
/// spectrogram window and selects freely inside it.
#[derive(Debug, Clone, Default)]
pub struct ViewSync {
    mode: ViewMode,
    manual_bounds: Option<TimeWindow>,
    spectrogram_window: TimeWindow,
    duration_ms: i64,
}

impl ViewSync {
    /// Sync state for a signal of `duration_ms`, with the spectrogram showing
    /// all of it.
    pub fn new(mode: ViewMode, duration_ms: i64) -> Self {
        let duration_ms = duration_ms.max(0);
        Self {
            mode,
            manual_bounds: None,
            spectrogram_window: TimeWindow::new(0, duration_ms),
            duration_ms,
        }
    }

    /// Forget everything tied to the previous signal.
    pub fn reset(&mut self, duration_ms: i64) {
        *self = Self::new(self.mode, duration_ms);
    }

    /// Current view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Origin tag for the current mode.
    pub fn origin(&self) -> SelectionOrigin {
        self.mode.origin()
    }

    /// Switch mode; returns `false` if it was already active.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        true
    }

    /// Whether the user overrode the full-view window.
    pub fn is_manual(&self) -> bool {
        self.manual_bounds.is_some()
    }

    /// Record a user-dragged full-view range.
    pub fn mark_manual(&mut self, bounds: TimeWindow) {
        self.manual_bounds = Some(bounds);
    }

    /// Go back to following the spectrogram window.
    pub fn clear_manual(&mut self) {
        self.manual_bounds = None;
    }

    /// Whole signal.
    pub fn full_window(&self) -> TimeWindow {
        TimeWindow::new(0, self.duration_ms)
    }

    /// Signal duration in ms.
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }

    /// Window currently shown by the spectrogram.
    pub fn spectrogram_window(&self) -> TimeWindow {
        self.spectrogram_window
    }

    /// Store a new spectrogram window, clamped to the signal.
    pub fn set_spectrogram_window(&mut self, window: TimeWindow) -> TimeWindow {
        self.spectrogram_window = window.within(self.full_window());
        self.spectrogram_window
    }

    /// Range the waveform panel should display in the current mode.
    pub fn visible_window(&self) -> TimeWindow {
        match self.mode {
            ViewMode::FullWaveform => self.full_window(),
            ViewMode::PartialWaveform => self.spectrogram_window,
        }
    }

    /// Bounds used when a drag yields nothing usable.
    ///
    /// The spectrogram window in the full view, no selection in the partial
    /// view.
    pub fn default_selection(&self) -> Selection {
        match self.mode {
            ViewMode::FullWaveform => {
                Selection::window(self.spectrogram_window, SelectionOrigin::FullView)
                    .with_manual(self.is_manual())
            }
            ViewMode::PartialWaveform => Selection::none(SelectionOrigin::PartialView),
        }
    }

    /// Authoritative full-view selection: the dragged bounds if the user made
    /// any, else the spectrogram window.
    pub fn full_view_selection(&self) -> Selection {
        self.manual_bounds.map_or_else(
            || Selection::window(self.spectrogram_window, SelectionOrigin::FullView),
            |bounds| Selection::window(bounds, SelectionOrigin::FullView).with_manual(true),
        )
    }

    /// Selection to adopt when the spectrogram window moves, if any.
    ///
    /// Only the full view without a manual range follows the window.
    pub fn resync(&self) -> Option<Selection> {
        (self.mode == ViewMode::FullWaveform && !self.is_manual())
            .then(|| Selection::window(self.spectrogram_window, SelectionOrigin::FullView))
    }
}
