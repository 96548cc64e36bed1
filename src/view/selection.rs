//! Selection values emitted by the coordinate engine.

use crate::view::TimeWindow;
use serde::{Deserialize, Serialize};

/// How a selection is drawn and played back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Nothing selected.
    #[default]
    None,
    /// A single time marker.
    Line,
    /// A time range box.
    Range,
}

/// View that produced a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrigin {
    /// Whole-signal waveform view.
    #[default]
    FullView,
    /// Zoomed view following the spectrogram.
    PartialView,
}

/// A normalized selection in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Start time in ms; never greater than `final_time`.
    pub initial_time: i64,
    /// End time in ms.
    pub final_time: i64,
    /// Display mode.
    pub mode: SelectionMode,
    /// View the selection belongs to.
    pub origin: SelectionOrigin,
    /// Set once the user dragged a range in the full view.
    pub manual: bool,
}

impl Selection {
    /// Empty selection at `[0, 0]`.
    pub fn none(origin: SelectionOrigin) -> Self {
        Self {
            initial_time: 0,
            final_time: 0,
            mode: SelectionMode::None,
            origin,
            manual: false,
        }
    }

    /// Time marker at `time`.
    pub fn line(time: i64, origin: SelectionOrigin) -> Self {
        Self {
            initial_time: time,
            final_time: time,
            mode: SelectionMode::Line,
            origin,
            manual: false,
        }
    }

    /// Range box between `a` and `b` in either order.
    pub fn range(a: i64, b: i64, origin: SelectionOrigin) -> Self {
        Self {
            initial_time: a.min(b),
            final_time: a.max(b),
            mode: SelectionMode::Range,
            origin,
            manual: false,
        }
    }

    /// Bounds produced by a drag.
    ///
    /// Equal bounds collapse to a line in the partial view only; the full
    /// view keeps showing a range box.
    pub fn dragged(a: i64, b: i64, origin: SelectionOrigin) -> Self {
        if a == b && origin == SelectionOrigin::PartialView {
            Self::line(a, origin)
        } else {
            Self::range(a, b, origin)
        }
    }

    /// Range covering a whole window.
    pub fn window(window: TimeWindow, origin: SelectionOrigin) -> Self {
        Self::range(window.start, window.end, origin)
    }

    /// Copy with the manual flag set.
    #[must_use]
    pub fn with_manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    /// Whether `time` lies inside the selection bounds (inclusive).
    pub fn contains(&self, time: i64) -> bool {
        (self.initial_time..=self.final_time).contains(&time)
    }

    /// Length in ms.
    pub fn duration(&self) -> i64 {
        self.final_time - self.initial_time
    }

    /// Bounds as a window.
    pub fn bounds(&self) -> TimeWindow {
        TimeWindow::new(self.initial_time, self.final_time)
    }

    /// Clamp both bounds into `window`.
    ///
    /// A partial-view range squeezed to a single instant becomes a line.
    #[must_use]
    pub fn clamped_to(self, window: TimeWindow) -> Self {
        if self.mode == SelectionMode::None {
            return self;
        }
        let initial_time = window.clamp(self.initial_time);
        let final_time = window.clamp(self.final_time);
        let mode = if initial_time == final_time && self.origin == SelectionOrigin::PartialView {
            SelectionMode::Line
        } else {
            self.mode
        };
        Self {
            initial_time,
            final_time,
            mode,
            ..self
        }
    }
}
