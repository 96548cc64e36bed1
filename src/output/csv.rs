//! CSV frame table writer.

use crate::constants::SAMPLE_DECIMAL_PLACES;
use crate::error::Result;
use crate::output::FrameWriter;
use crate::preprocessing::{Frame, FrameSequence};
use std::io::Write;

/// Writes one row per frame: index, start sample, start time, then samples.
pub struct CsvFrameWriter<W: Write> {
    writer: csv::Writer<W>,
    sample_rate: u32,
}

impl<W: Write> CsvFrameWriter<W> {
    /// Create a CSV writer over any byte sink.
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(false).from_writer(sink),
            sample_rate: 0,
        }
    }
}

impl<W: Write> FrameWriter for CsvFrameWriter<W> {
    fn write_header(&mut self, sequence: &FrameSequence) -> Result<()> {
        self.sample_rate = sequence.sample_rate;

        let mut header = vec![
            "Frame".to_string(),
            "Start sample".to_string(),
            "Start (s)".to_string(),
        ];
        header.extend((0..sequence.frame_length).map(|i| format!("s{i}")));
        self.writer.write_record(&header)?;
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        let mut record = Vec::with_capacity(frame.samples.len() + 3);
        record.push(frame.index.to_string());
        record.push(frame.start_sample.to_string());
        record.push(format!(
            "{:.decimal$}",
            frame.start_time(self.sample_rate),
            decimal = SAMPLE_DECIMAL_PLACES
        ));
        record.extend(
            frame
                .samples
                .iter()
                .map(|s| format!("{s:.decimal$}", decimal = SAMPLE_DECIMAL_PLACES)),
        );
        self.writer.write_record(&record)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
