//! Visible time range and its pixel scale.

use crate::error::{Error, Result};
use crate::view::ViewEvent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A time window in milliseconds with `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Window start in ms.
    pub start: i64,
    /// Window end in ms.
    pub end: i64,
}

impl TimeWindow {
    /// Create a window, swapping the bounds if needed.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Window length in ms.
    pub fn duration(self) -> i64 {
        self.end - self.start
    }

    /// Whether `time` lies inside the window (inclusive).
    pub fn contains(self, time: i64) -> bool {
        (self.start..=self.end).contains(&time)
    }

    /// Clamp `time` into the window.
    pub fn clamp(self, time: i64) -> i64 {
        time.clamp(self.start, self.end)
    }

    /// Clamp both bounds into `outer`.
    #[must_use]
    pub fn within(self, outer: Self) -> Self {
        Self::new(outer.clamp(self.start), outer.clamp(self.end))
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms → {}ms", self.start, self.end)
    }
}

/// Visible time range of one waveform panel and its time-per-pixel ratio.
///
/// Both mutators report a [`ViewEvent::ViewportChanged`] only when a tracked
/// value actually changed, so the renderer never rescales for nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewPort {
    visible: TimeWindow,
    panel_width: u32,
    panel_height: u32,
    time_per_pixel: f64,
}

impl ViewPort {
    /// Viewport over `visible` on a panel `panel_width` pixels wide.
    pub fn new(visible: TimeWindow, panel_width: u32, panel_height: u32) -> Self {
        let mut viewport = Self {
            visible,
            panel_width,
            panel_height,
            time_per_pixel: 0.0,
        };
        viewport.recompute();
        viewport
    }

    /// Apply a new panel size.
    ///
    /// Height is recorded for collaborators but does not affect the time
    /// mapping, so a height-only change emits nothing.
    pub fn resize(&mut self, panel_width: u32, panel_height: u32) -> Option<ViewEvent> {
        self.panel_height = panel_height;
        if panel_width == self.panel_width {
            return None;
        }
        self.panel_width = panel_width;
        self.recompute();
        Some(self.changed_event())
    }

    /// Show another time range.
    pub fn set_visible_range(&mut self, visible: TimeWindow) -> Option<ViewEvent> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        self.recompute();
        Some(self.changed_event())
    }

    fn recompute(&mut self) {
        self.time_per_pixel = if self.panel_width == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let duration = self.visible.duration() as f64;
            duration / f64::from(self.panel_width)
        };
    }

    fn changed_event(&self) -> ViewEvent {
        ViewEvent::ViewportChanged {
            time_per_pixel: self.time_per_pixel,
            visible_start: self.visible.start,
            visible_end: self.visible.end,
        }
    }

    /// Visible time range.
    pub fn visible(&self) -> TimeWindow {
        self.visible
    }

    /// Panel width in pixels.
    pub fn panel_width(&self) -> u32 {
        self.panel_width
    }

    /// Panel height in pixels.
    pub fn panel_height(&self) -> u32 {
        self.panel_height
    }

    /// Milliseconds per pixel, possibly zero.
    pub fn time_per_pixel(&self) -> f64 {
        self.time_per_pixel
    }

    /// Milliseconds per pixel, or [`Error::DegenerateViewport`] if not positive.
    pub fn checked_time_per_pixel(&self) -> Result<f64> {
        if self.time_per_pixel > 0.0 && self.time_per_pixel.is_finite() {
            Ok(self.time_per_pixel)
        } else {
            Err(Error::DegenerateViewport {
                time_per_pixel: self.time_per_pixel,
            })
        }
    }

    /// Time under panel pixel `x`, clamped to the visible range.
    ///
    /// Pixels inside the gutter map to the visible start and pixels past the
    /// right edge map to the visible end.
    #[allow(clippy::cast_possible_truncation)]
    pub fn time_at(&self, x: i32) -> Result<i64> {
        let time_per_pixel = self.checked_time_per_pixel()?;
        let offset = (time_per_pixel * f64::from(x)).floor() as i64;
        Ok(self.visible.clamp(self.visible.start.saturating_add(offset)))
    }

    /// Whether `x` lies left of the first waveform pixel.
    pub fn in_gutter(x: i32) -> bool {
        x < 0
    }

    /// Whether `x` lies past the right edge of the panel.
    pub fn past_right_edge(&self, x: i32) -> bool {
        i64::from(x) > i64::from(self.panel_width)
    }
}
