//! JSON-lines writer for view events.

use crate::error::Result;
use crate::view::ViewEvent;
use serde::Serialize;
use std::io::Write;

/// One emitted event stamped with the script time that produced it.
#[derive(Debug, Serialize)]
struct EventLine<'a> {
    at_ms: u64,
    #[serde(flatten)]
    event: &'a ViewEvent,
}

/// Writes each [`ViewEvent`] as one JSON object per line.
pub struct EventWriter<W: Write> {
    sink: W,
    written: usize,
}

impl<W: Write> EventWriter<W> {
    /// Create an event writer over any byte sink.
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    /// Write every event produced at `at_ms`.
    pub fn write_events(&mut self, at_ms: u64, events: &[ViewEvent]) -> Result<()> {
        for event in events {
            serde_json::to_writer(&mut self.sink, &EventLine { at_ms, event })?;
            writeln!(self.sink)?;
        }
        self.written += events.len();
        Ok(())
    }

    /// Number of events written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush the underlying sink.
    pub fn finalize(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
