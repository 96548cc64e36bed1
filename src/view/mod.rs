//! Pixel/time coordinates and selection state for the waveform panel.
//!
//! The host toolkit translates its own mouse and resize events into
//! [`PointerEvent`] and [`ResizeEvent`], feeds them to a
//! [`SelectionCoordinateEngine`], and forwards the returned [`ViewEvent`]s to
//! the renderer and the playback range selector.

mod engine;
mod events;
mod selection;
mod sync;
mod throttle;
mod viewport;

pub use engine::{EngineConfig, Interaction, SelectionCoordinateEngine};
pub use events::{MouseButton, PointerEvent, PointerKind, ResizeEvent, ViewEvent};
pub use selection::{Selection, SelectionMode, SelectionOrigin};
pub use sync::{ViewMode, ViewSync};
pub use throttle::{Motion, MotionThrottle};
pub use viewport::{TimeWindow, ViewPort};
