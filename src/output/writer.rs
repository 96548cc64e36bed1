//! Output writer trait definition.

use crate::error::Result;
use crate::preprocessing::{Frame, FrameSequence};

/// Trait for writing frame sequences.
pub trait FrameWriter {
    /// Write the header (if applicable).
    fn write_header(&mut self, sequence: &FrameSequence) -> Result<()>;

    /// Write a single frame.
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;

    /// Write a whole sequence: header, every frame, then finalize.
    fn write_sequence(&mut self, sequence: &FrameSequence) -> Result<()> {
        self.write_header(sequence)?;
        for frame in &sequence.frames {
            self.write_frame(frame)?;
        }
        self.finalize()
    }
}
