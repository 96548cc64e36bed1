//! Pointer-driven selection state machine for one waveform view session.

use crate::constants::pointer::DEFAULT_MOTION_INTERVAL_MS;
use crate::error::Result;
use crate::view::throttle::{Motion, MotionThrottle};
use crate::view::{
    MouseButton, PointerEvent, PointerKind, ResizeEvent, Selection, TimeWindow, ViewEvent,
    ViewMode, ViewPort, ViewSync,
};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum interval between processed drag/move events.
    pub motion_interval: Duration,
    /// View mode a new session starts in.
    pub view_mode: ViewMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            motion_interval: Duration::from_millis(DEFAULT_MOTION_INTERVAL_MS),
            view_mode: ViewMode::FullWaveform,
        }
    }
}

/// Press/drag/release progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    /// No button held.
    #[default]
    Idle,
    /// Button pressed, no drag processed yet.
    Anchored {
        /// Panel x recorded at press time.
        anchor_x: i32,
    },
    /// At least one drag processed.
    Dragging {
        /// Panel x recorded at press time.
        anchor_x: i32,
    },
}

impl Interaction {
    /// Anchor of the current interaction, if any.
    pub fn anchor(self) -> Option<i32> {
        match self {
            Self::Idle => None,
            Self::Anchored { anchor_x } | Self::Dragging { anchor_x } => Some(anchor_x),
        }
    }
}

/// Converts pointer and resize input into selection and viewport events.
///
/// One engine owns the viewport, view sync state and selection of a single
/// waveform panel. Events are processed one at a time; every method returns
/// the events it produced as owned values.
#[derive(Debug, Clone)]
pub struct SelectionCoordinateEngine {
    viewport: ViewPort,
    sync: ViewSync,
    selection: Selection,
    interaction: Interaction,
    throttle: MotionThrottle,
}

impl Default for SelectionCoordinateEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl SelectionCoordinateEngine {
    /// Engine with no signal loaded and a zero-width panel.
    pub fn new(config: EngineConfig) -> Self {
        let sync = ViewSync::new(config.view_mode, 0);
        let selection = initial_selection(&sync);
        Self {
            viewport: ViewPort::default(),
            sync,
            selection,
            interaction: Interaction::Idle,
            throttle: MotionThrottle::new(config.motion_interval),
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> &ViewPort {
        &self.viewport
    }

    /// Current authoritative selection.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.sync.mode()
    }

    /// Whether the full-view selection was dragged by the user.
    pub fn is_manual_selection(&self) -> bool {
        self.sync.is_manual()
    }

    /// Spectrogram window in use.
    pub fn spectrogram_window(&self) -> TimeWindow {
        self.sync.spectrogram_window()
    }

    /// Press/drag/release progress.
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Start a session for a new signal of `duration_ms`.
    ///
    /// Drops the anchor, the manual flag and any coalesced motion; the
    /// spectrogram window covers the whole signal until told otherwise.
    pub fn load_signal(&mut self, duration_ms: i64) -> Vec<ViewEvent> {
        debug!("Loading signal of {} ms", duration_ms);
        self.sync.reset(duration_ms);
        self.interaction = Interaction::Idle;
        self.throttle.clear();
        self.selection = initial_selection(&self.sync);

        let mut events: Vec<ViewEvent> = self
            .viewport
            .set_visible_range(self.sync.visible_window())
            .into_iter()
            .collect();
        events.push(ViewEvent::SelectionChanged(self.selection));
        events
    }

    /// Apply a panel resize.
    pub fn resize(&mut self, event: ResizeEvent) -> Option<ViewEvent> {
        let changed = self.viewport.resize(event.panel_width, event.panel_height);
        if changed.is_some() {
            debug!(
                "Panel resized to {}x{} ({:.3} ms/px)",
                event.panel_width,
                event.panel_height,
                self.viewport.time_per_pixel()
            );
        }
        changed
    }

    /// Show an explicit time range in the panel.
    pub fn set_visible_range(&mut self, start: i64, end: i64) -> Option<ViewEvent> {
        self.viewport.set_visible_range(TimeWindow::new(start, end))
    }

    /// Update the window shown by the paired spectrogram.
    ///
    /// The partial view follows it; the full view adopts it as selection
    /// unless the user dragged one.
    pub fn set_spectrogram_window(&mut self, start: i64, end: i64) -> Vec<ViewEvent> {
        let window = self
            .sync
            .set_spectrogram_window(TimeWindow::new(start, end));
        trace!("Spectrogram window set to {}", window);

        let mut events = Vec::new();
        match self.sync.mode() {
            ViewMode::PartialWaveform => {
                events.extend(self.viewport.set_visible_range(window));
                let clamped = self.selection.clamped_to(window);
                if clamped != self.selection {
                    self.selection = clamped;
                    events.push(ViewEvent::SelectionChanged(clamped));
                }
            }
            ViewMode::FullWaveform => {
                if let Some(selection) = self.sync.resync()
                    && selection != self.selection
                {
                    self.selection = selection;
                    events.push(ViewEvent::SelectionChanged(selection));
                }
            }
        }
        events
    }

    /// Switch between the full and partial waveform views.
    ///
    /// Entering the full view restores the authoritative full-view selection
    /// (spectrogram window or dragged range). Entering the partial view turns
    /// the selection into a time marker until a new drag.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> Vec<ViewEvent> {
        if !self.sync.set_mode(mode) {
            return Vec::new();
        }
        debug!("Switching waveform view to {}", mode);
        self.interaction = Interaction::Idle;
        self.throttle.clear();

        let mut events: Vec<ViewEvent> = self
            .viewport
            .set_visible_range(self.sync.visible_window())
            .into_iter()
            .collect();

        self.selection = match mode {
            ViewMode::FullWaveform => self.sync.full_view_selection(),
            ViewMode::PartialWaveform => {
                let window = self.sync.visible_window();
                Selection::line(
                    window.clamp(self.selection.initial_time),
                    mode.origin(),
                )
            }
        };
        events.push(ViewEvent::SelectionChanged(self.selection));
        events
    }

    /// Return the full view to following the spectrogram window.
    pub fn clear_manual_selection(&mut self) -> Vec<ViewEvent> {
        self.sync.clear_manual();
        match self.sync.resync() {
            Some(selection) if selection != self.selection => {
                self.selection = selection;
                vec![ViewEvent::SelectionChanged(selection)]
            }
            _ => Vec::new(),
        }
    }

    /// Dispatch a pointer event from the host toolkit.
    ///
    /// Only the left button drives selection; cursor tracking ignores buttons.
    pub fn handle(&mut self, event: PointerEvent, now: Instant) -> Result<Vec<ViewEvent>> {
        match (event.kind, event.button) {
            (PointerKind::Move, _) => self.pointer_move(event.x, now),
            (_, MouseButton::Other) => Ok(Vec::new()),
            (PointerKind::Press, MouseButton::Left) => self.press(event.x),
            (PointerKind::Drag, MouseButton::Left) => self.drag(event.x, now),
            (PointerKind::Release, MouseButton::Left) => self.release(event.x),
        }
    }

    /// Button press at panel x.
    ///
    /// Anchors the interaction and emits a time marker. In the full view a
    /// press outside the selection box snaps the marker to the spectrogram
    /// window start; the box itself is kept.
    pub fn press(&mut self, x: i32) -> Result<Vec<ViewEvent>> {
        let time = self.viewport.time_at(x)?;
        self.interaction = Interaction::Anchored { anchor_x: x };
        self.throttle.clear();

        let marker = match self.sync.mode() {
            ViewMode::FullWaveform => {
                Selection::line(self.snap_to_selection(time), self.sync.origin())
                    .with_manual(self.sync.is_manual())
            }
            ViewMode::PartialWaveform => {
                self.selection = Selection::line(time, self.sync.origin());
                self.selection
            }
        };
        trace!("Press at x={} -> {} ms", x, marker.initial_time);
        Ok(vec![ViewEvent::SelectionChanged(marker)])
    }

    /// Pointer moved with the button held.
    ///
    /// Rate limited; a drag inside the interval is kept and processed by
    /// [`Self::poll`] or superseded by the next drag or the release.
    pub fn drag(&mut self, x: i32, now: Instant) -> Result<Vec<ViewEvent>> {
        let Some(anchor_x) = self.interaction.anchor() else {
            trace!("Ignoring drag without press");
            return Ok(Vec::new());
        };
        self.viewport.checked_time_per_pixel()?;

        if !self.throttle.admit(Motion::Drag(x), now) {
            return Ok(Vec::new());
        }
        self.apply_drag(anchor_x, x)
    }

    /// Button release at panel x; ends the interaction.
    ///
    /// A release at the anchor time is a click: the full view emits a marker
    /// snapped like [`Self::press`], the partial view a marker at the time.
    /// Anything else finalizes the dragged range at the release position.
    pub fn release(&mut self, x: i32) -> Result<Vec<ViewEvent>> {
        let Some(anchor_x) = self.interaction.anchor() else {
            trace!("Ignoring release without press");
            return Ok(Vec::new());
        };
        let current = self.viewport.time_at(x)?;
        let anchor_time = self.viewport.time_at(anchor_x)?;

        let events = if anchor_time == current {
            let marker = match self.sync.mode() {
                ViewMode::FullWaveform => {
                    Selection::line(self.snap_to_selection(current), self.sync.origin())
                        .with_manual(self.sync.is_manual())
                }
                ViewMode::PartialWaveform => {
                    self.selection = Selection::line(current, self.sync.origin());
                    self.selection
                }
            };
            vec![ViewEvent::SelectionChanged(marker)]
        } else {
            self.apply_drag(anchor_x, x)?
        };

        self.interaction = Interaction::Idle;
        self.throttle.clear();
        Ok(events)
    }

    /// Pointer moved with no button held; reports the time under it.
    pub fn pointer_move(&mut self, x: i32, now: Instant) -> Result<Vec<ViewEvent>> {
        let time = self.viewport.time_at(x)?;
        if !self.throttle.admit(Motion::Hover(x), now) {
            return Ok(Vec::new());
        }
        Ok(vec![ViewEvent::CursorTimeChanged { time }])
    }

    /// Process a coalesced drag/move whose interval has passed.
    ///
    /// Hosts call this from their event loop tick so the last motion of a
    /// burst is not lost.
    pub fn poll(&mut self, now: Instant) -> Result<Vec<ViewEvent>> {
        match self.throttle.take_due(now) {
            Some(Motion::Drag(x)) => match self.interaction.anchor() {
                Some(anchor_x) => self.apply_drag(anchor_x, x),
                None => Ok(Vec::new()),
            },
            Some(Motion::Hover(x)) => Ok(vec![ViewEvent::CursorTimeChanged {
                time: self.viewport.time_at(x)?,
            }]),
            None => Ok(Vec::new()),
        }
    }

    /// Marker time for a full-view click: inside the box it stays, outside it
    /// returns to the spectrogram window start.
    fn snap_to_selection(&self, time: i64) -> i64 {
        if self.selection.contains(time) {
            time
        } else {
            self.sync.spectrogram_window().start
        }
    }

    fn apply_drag(&mut self, anchor_x: i32, x: i32) -> Result<Vec<ViewEvent>> {
        let current = self.viewport.time_at(x)?;
        let mut selection = self.drag_bounds(anchor_x, x, current)?;

        if self.sync.mode() == ViewMode::FullWaveform {
            self.sync.mark_manual(selection.bounds());
            selection = selection.with_manual(true);
        }

        self.selection = selection;
        self.interaction = Interaction::Dragging { anchor_x };
        trace!(
            "Drag x={} -> [{}, {}] {:?}",
            x, selection.initial_time, selection.final_time, selection.mode
        );

        Ok(vec![
            ViewEvent::SelectionChanged(selection),
            ViewEvent::CursorTimeChanged { time: current },
        ])
    }

    fn drag_bounds(&self, anchor_x: i32, x: i32, current: i64) -> Result<Selection> {
        let origin = self.sync.origin();

        // Drag started on the axis gutter
        if ViewPort::in_gutter(anchor_x) {
            return Ok(if ViewPort::in_gutter(x) {
                self.sync.default_selection()
            } else {
                Selection::dragged(self.viewport.visible().start, current, origin)
            });
        }

        // Both times are already clamped, so leaving the panel on either side
        // pins the bound to the visible start or end.
        if self.viewport.past_right_edge(x) {
            trace!("Drag past right edge x={}, pinned to {}", x, current);
        }
        let anchor_time = self.viewport.time_at(anchor_x)?;
        Ok(Selection::dragged(anchor_time, current, origin))
    }
}

fn initial_selection(sync: &ViewSync) -> Selection {
    match sync.mode() {
        ViewMode::FullWaveform => sync.full_view_selection(),
        ViewMode::PartialWaveform => Selection::line(sync.visible_window().start, sync.origin()),
    }
}
