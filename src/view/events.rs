//! Input and output events of a waveform view session.

use crate::view::Selection;
use serde::{Deserialize, Serialize};

/// Kind of pointer event delivered by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Button pressed.
    Press,
    /// Pointer moved with the button held.
    Drag,
    /// Button released.
    Release,
    /// Pointer moved with no button held.
    Move,
}

/// Mouse button attached to a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Primary button; the only one that drives selection.
    #[default]
    Left,
    /// Any other button, left for other collaborators.
    Other,
}

/// Pointer input in panel coordinates.
///
/// `x == 0` is the first pixel right of the axis gutter; negative values lie
/// inside the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Horizontal position in pixels.
    pub x: i32,
    /// Vertical position in pixels.
    #[serde(default)]
    pub y: i32,
    /// Button involved.
    #[serde(default)]
    pub button: MouseButton,
}

impl PointerEvent {
    /// Left-button event at `(x, y)`.
    pub fn left(kind: PointerKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            button: MouseButton::Left,
        }
    }
}

/// Panel size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeEvent {
    /// New panel width in pixels, excluding the axis gutter.
    pub panel_width: u32,
    /// New panel height in pixels.
    pub panel_height: u32,
}

/// Event emitted for the renderer and the playback range selector.
///
/// Values are snapshots; the engine never hands out references to its state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The selection or time marker changed.
    SelectionChanged(Selection),
    /// The visible range or its pixel scale changed.
    ViewportChanged {
        /// Milliseconds per pixel.
        time_per_pixel: f64,
        /// Visible range start in ms.
        visible_start: i64,
        /// Visible range end in ms.
        visible_end: i64,
    },
    /// The time under the pointer changed.
    CursorTimeChanged {
        /// Time under the pointer in ms.
        time: i64,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::view::SelectionOrigin;

    #[test]
    fn test_pointer_event_defaults_to_left_button() {
        let event: PointerEvent = serde_json::from_str(r#"{"kind":"press","x":12}"#).unwrap();
        assert_eq!(event, PointerEvent::left(PointerKind::Press, 12, 0));
    }

    #[test]
    fn test_view_event_is_tagged() {
        let event = ViewEvent::CursorTimeChanged { time: 40 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"cursor_time_changed","time":40}"#);
    }

    #[test]
    fn test_selection_event_flattens_selection() {
        let event = ViewEvent::SelectionChanged(Selection::line(10, SelectionOrigin::PartialView));
        let value: serde_json::Value = serde_json::to_value(event).unwrap();
        assert_eq!(value["event"], "selection_changed");
        assert_eq!(value["mode"], "line");
        assert_eq!(value["initial_time"], 10);
    }
}
