//! The `replay` command: drive a selection session from a JSON script.
//!
//! A script stands in for the host toolkit. It fixes the signal duration and
//! the panel size, then lists timed pointer, resize and view actions. Every
//! event the engine emits is written as one JSON line stamped with the
//! script time that produced it.

use crate::cli::ReplayArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::EventWriter;
use crate::view::{
    EngineConfig, MouseButton, PointerEvent, PointerKind, ResizeEvent, SelectionCoordinateEngine,
    ViewEvent, ViewMode,
};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Panel size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PanelSize {
    /// Width excluding the axis gutter.
    pub width: u32,
    /// Height.
    #[serde(default)]
    pub height: u32,
}

/// Time range in ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowSpec {
    /// Start in ms.
    pub start: i64,
    /// End in ms.
    pub end: i64,
}

/// Whole replay script.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    /// Duration of the loaded signal in ms.
    pub duration_ms: i64,
    /// Initial panel size.
    pub panel: PanelSize,
    /// Initial spectrogram window; the whole signal when absent.
    #[serde(default)]
    pub spectrogram_window: Option<WindowSpec>,
    /// Initial view mode; the configured default when absent.
    #[serde(default)]
    pub view_mode: Option<ViewMode>,
    /// Motion interval override in ms.
    #[serde(default)]
    pub motion_interval_ms: Option<u64>,
    /// Timed actions in non-decreasing `at_ms` order.
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

/// One timed action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplayStep {
    /// Milliseconds since the session started.
    pub at_ms: u64,
    /// What happens at that time.
    #[serde(flatten)]
    pub action: ReplayAction,
}

/// Actions a script can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayAction {
    /// Button press.
    Press {
        /// Panel x.
        x: i32,
        /// Button, left by default.
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer moved with the button held.
    Drag {
        /// Panel x.
        x: i32,
        /// Button, left by default.
        #[serde(default)]
        button: MouseButton,
    },
    /// Button release.
    Release {
        /// Panel x.
        x: i32,
        /// Button, left by default.
        #[serde(default)]
        button: MouseButton,
    },
    /// Pointer moved with no button held.
    Move {
        /// Panel x.
        x: i32,
    },
    /// Panel resize.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        #[serde(default)]
        height: u32,
    },
    /// Switch between full and partial view.
    ViewMode {
        /// Target mode.
        mode: ViewMode,
    },
    /// Move the spectrogram window.
    SpectrogramWindow {
        /// Start in ms.
        start: i64,
        /// End in ms.
        end: i64,
    },
    /// Go back to following the spectrogram window.
    ClearManual,
    /// Event loop tick; flushes coalesced motion.
    Poll,
}

impl ReplayScript {
    /// Read and check a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ScriptRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let script: Self = serde_json::from_str(&contents).map_err(|e| Error::ScriptParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        script.check().map_err(|message| Error::ScriptInvalid {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(script)
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.duration_ms < 0 {
            return Err(format!(
                "duration_ms must not be negative, got {}",
                self.duration_ms
            ));
        }
        if let Some(pair) = self
            .steps
            .windows(2)
            .find(|pair| pair[1].at_ms < pair[0].at_ms)
        {
            return Err(format!(
                "steps must be in time order ({} ms follows {} ms)",
                pair[1].at_ms, pair[0].at_ms
            ));
        }
        Ok(())
    }
}

/// Run a script against a fresh engine, writing every emitted event.
///
/// Step times are laid out from a single start instant so the motion
/// throttle sees the scripted spacing, not the wall clock. A step hitting a
/// degenerate viewport is skipped with a warning, as a host would wait for
/// the next resize.
pub fn run_script<W: Write>(
    script: &ReplayScript,
    mut config: EngineConfig,
    writer: &mut EventWriter<W>,
) -> Result<SelectionCoordinateEngine> {
    if let Some(mode) = script.view_mode {
        config.view_mode = mode;
    }
    if let Some(ms) = script.motion_interval_ms {
        config.motion_interval = Duration::from_millis(ms);
    }

    let mut engine = SelectionCoordinateEngine::new(config);
    let start = Instant::now();

    let mut setup: Vec<ViewEvent> = engine
        .resize(ResizeEvent {
            panel_width: script.panel.width,
            panel_height: script.panel.height,
        })
        .into_iter()
        .collect();
    setup.extend(engine.load_signal(script.duration_ms));
    if let Some(window) = script.spectrogram_window {
        setup.extend(engine.set_spectrogram_window(window.start, window.end));
    }
    writer.write_events(0, &setup)?;

    for step in &script.steps {
        let now = start + Duration::from_millis(step.at_ms);
        match apply(&mut engine, step.action, now) {
            Ok(events) => writer.write_events(step.at_ms, &events)?,
            Err(e @ Error::DegenerateViewport { .. }) => {
                warn!("Skipping {:?} at {} ms: {}", step.action, step.at_ms, e);
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        "Replayed {} step(s), final selection {:?}",
        script.steps.len(),
        engine.selection()
    );
    Ok(engine)
}

fn apply(
    engine: &mut SelectionCoordinateEngine,
    action: ReplayAction,
    now: Instant,
) -> Result<Vec<ViewEvent>> {
    let pointer = |kind, x, button| PointerEvent {
        kind,
        x,
        y: 0,
        button,
    };

    match action {
        ReplayAction::Press { x, button } => {
            engine.handle(pointer(PointerKind::Press, x, button), now)
        }
        ReplayAction::Drag { x, button } => {
            engine.handle(pointer(PointerKind::Drag, x, button), now)
        }
        ReplayAction::Release { x, button } => {
            engine.handle(pointer(PointerKind::Release, x, button), now)
        }
        ReplayAction::Move { x } => {
            engine.handle(pointer(PointerKind::Move, x, MouseButton::Left), now)
        }
        ReplayAction::Resize { width, height } => Ok(engine
            .resize(ResizeEvent {
                panel_width: width,
                panel_height: height,
            })
            .into_iter()
            .collect()),
        ReplayAction::ViewMode { mode } => Ok(engine.set_view_mode(mode)),
        ReplayAction::SpectrogramWindow { start, end } => {
            Ok(engine.set_spectrogram_window(start, end))
        }
        ReplayAction::ClearManual => Ok(engine.clear_manual_selection()),
        ReplayAction::Poll => engine.poll(now),
    }
}

/// Run the `replay` command.
pub fn run_replay(args: &ReplayArgs, config: &Config) -> Result<()> {
    let script = ReplayScript::load(&args.script)?;
    let mut engine_config = config.view.to_engine_config();
    if let Some(ms) = args.motion_interval_ms {
        engine_config.motion_interval = Duration::from_millis(ms);
    }

    info!(
        "Replaying {} step(s) from {}",
        script.steps.len(),
        args.script.display()
    );

    let sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    let mut writer = EventWriter::new(sink);
    run_script(&script, engine_config, &mut writer)?;
    writer.finalize()?;

    info!("Emitted {} event(s)", writer.written());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::view::SelectionMode;

    fn script(json: &str) -> ReplayScript {
        serde_json::from_str(json).unwrap()
    }

    fn replay(script: &ReplayScript) -> (SelectionCoordinateEngine, Vec<serde_json::Value>) {
        let mut buffer = Vec::new();
        let engine = {
            let mut writer = EventWriter::new(&mut buffer);
            run_script(
                script,
                EngineConfig {
                    motion_interval: Duration::from_millis(25),
                    view_mode: ViewMode::FullWaveform,
                },
                &mut writer,
            )
            .unwrap()
        };
        let lines = String::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (engine, lines)
    }

    #[test]
    fn test_script_parses_actions() {
        let script = script(
            r#"{
                "duration_ms": 1000,
                "panel": {"width": 100, "height": 40},
                "steps": [
                    {"at_ms": 0, "action": "press", "x": 10},
                    {"at_ms": 5, "action": "drag", "x": 20, "button": "other"},
                    {"at_ms": 6, "action": "view_mode", "mode": "partial"},
                    {"at_ms": 7, "action": "poll"}
                ]
            }"#,
        );
        assert_eq!(script.steps.len(), 4);
        assert_eq!(
            script.steps[1].action,
            ReplayAction::Drag {
                x: 20,
                button: MouseButton::Other
            }
        );
        assert_eq!(script.steps[3].action, ReplayAction::Poll);
    }

    #[test]
    fn test_script_rejects_out_of_order_steps() {
        let script = script(
            r#"{
                "duration_ms": 1000,
                "panel": {"width": 100},
                "steps": [
                    {"at_ms": 10, "action": "move", "x": 1},
                    {"at_ms": 5, "action": "move", "x": 2}
                ]
            }"#,
        );
        assert!(script.check().is_err());
    }

    #[test]
    fn test_setup_emits_viewport_and_selection() {
        let (_, lines) = replay(&script(
            r#"{"duration_ms": 1000, "panel": {"width": 100, "height": 40}}"#,
        ));
        assert!(lines.iter().all(|line| line["at_ms"] == 0));
        assert!(lines.iter().any(|line| line["event"] == "viewport_changed"
            && line["visible_end"] == 1000
            && line["time_per_pixel"] == 10.0));
        assert_eq!(lines.last().unwrap()["event"], "selection_changed");
    }

    #[test]
    fn test_drag_burst_is_throttled_and_polled() {
        let (engine, lines) = replay(&script(
            r#"{
                "duration_ms": 1000,
                "panel": {"width": 100},
                "view_mode": "partial",
                "steps": [
                    {"at_ms": 0, "action": "press", "x": 10},
                    {"at_ms": 1, "action": "drag", "x": 20},
                    {"at_ms": 5, "action": "drag", "x": 30},
                    {"at_ms": 9, "action": "drag", "x": 40},
                    {"at_ms": 30, "action": "poll"}
                ]
            }"#,
        ));

        let drags: Vec<&serde_json::Value> = lines
            .iter()
            .filter(|line| line["event"] == "selection_changed" && line["mode"] == "range")
            .collect();
        assert_eq!(drags.len(), 2);
        assert_eq!(drags[0]["final_time"], 200);
        assert_eq!(drags[1]["at_ms"], 30);
        assert_eq!(drags[1]["final_time"], 400);
        assert_eq!(engine.selection().mode, SelectionMode::Range);
    }

    #[test]
    fn test_degenerate_steps_are_skipped() {
        let (engine, lines) = replay(&script(
            r#"{
                "duration_ms": 1000,
                "panel": {"width": 0},
                "steps": [
                    {"at_ms": 0, "action": "press", "x": 10},
                    {"at_ms": 1, "action": "resize", "width": 100},
                    {"at_ms": 2, "action": "move", "x": 50}
                ]
            }"#,
        ));
        assert!(!lines.iter().any(|line| line["at_ms"] == 0
            && line["event"] == "selection_changed"
            && line["mode"] == "line"));
        assert!(
            lines
                .iter()
                .any(|line| line["event"] == "cursor_time_changed" && line["time"] == 500)
        );
        assert_eq!(engine.viewport().panel_width(), 100);
    }
}
