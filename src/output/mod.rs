//! Output format writers.

mod csv;
mod events;
mod json;
mod writer;

pub use self::csv::CsvFrameWriter;
pub use events::EventWriter;
pub use json::{JsonFrameFile, JsonFrameWriter};
pub use writer::FrameWriter;
