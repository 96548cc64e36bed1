//! JSON frame dump writer.

use crate::error::Result;
use crate::output::FrameWriter;
use crate::preprocessing::{Frame, FrameSequence};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON document describing one preprocessing run.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFrameFile {
    /// Source audio file name.
    pub source_file: String,
    /// Pre-emphasis coefficient used, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_emphasis_alpha: Option<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Samples per frame.
    pub frame_length: usize,
    /// Stride between frame starts in samples.
    pub hop: usize,
    /// Number of frames.
    pub frame_count: usize,
    /// Frames in index order.
    pub frames: Vec<Frame>,
}

/// Buffers frames and writes a single JSON document on finalize.
pub struct JsonFrameWriter<W: Write> {
    sink: W,
    source_file: String,
    pre_emphasis_alpha: Option<f32>,
    sample_rate: u32,
    frame_length: usize,
    hop: usize,
    frames: Vec<Frame>,
}

impl<W: Write> JsonFrameWriter<W> {
    /// Create a JSON writer for frames taken from `source_file`.
    pub fn new(sink: W, source_file: &str, pre_emphasis_alpha: Option<f32>) -> Self {
        Self {
            sink,
            source_file: source_file.to_string(),
            pre_emphasis_alpha,
            sample_rate: 0,
            frame_length: 0,
            hop: 0,
            frames: Vec::new(),
        }
    }
}

impl<W: Write> FrameWriter for JsonFrameWriter<W> {
    fn write_header(&mut self, sequence: &FrameSequence) -> Result<()> {
        // Written at finalize
        self.sample_rate = sequence.sample_rate;
        self.frame_length = sequence.frame_length;
        self.hop = sequence.hop;
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        let file = JsonFrameFile {
            source_file: self.source_file.clone(),
            pre_emphasis_alpha: self.pre_emphasis_alpha,
            sample_rate: self.sample_rate,
            frame_length: self.frame_length,
            hop: self.hop,
            frame_count: self.frames.len(),
            frames: std::mem::take(&mut self.frames),
        };

        serde_json::to_writer_pretty(&mut self.sink, &file)?;
        writeln!(self.sink)?;
        self.sink.flush()?;
        Ok(())
    }
}
