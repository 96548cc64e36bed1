//! Signal preprocessing for feature extraction.
//!
//! Every function here is pure: the same input always yields the same frames
//! and no state is shared, so independent signals can be processed on any
//! thread.

mod emphasis;
mod framer;
mod pipeline;

pub use emphasis::{pre_emphasis, pre_emphasis_default};
pub use framer::{Frame, FrameConfig, frame, frame_count, frame_default, frame_with};
pub use pipeline::{FrameSequence, PreprocessingConfig, preprocess};
