//! Frame blocking with overlap support.

use crate::constants::{DEFAULT_FRAME_LENGTH, DEFAULT_OVERLAP_SAMPLES};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fixed-length analysis frame and its position in the source signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Position of this frame in the sequence.
    pub index: usize,
    /// Index of the first source sample covered by this frame.
    pub start_sample: usize,
    /// Frame samples, zero-padded past the end of the source.
    pub samples: Vec<f32>,
}

impl Frame {
    /// Start time of this frame in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn start_time(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.start_sample as f64 / f64::from(sample_rate)
    }
}

/// Frame length and overlap, in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Number of samples per frame.
    pub frame_length: usize,
    /// Number of samples shared by consecutive frames.
    pub overlap_samples: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            frame_length: DEFAULT_FRAME_LENGTH,
            overlap_samples: DEFAULT_OVERLAP_SAMPLES,
        }
    }
}

impl FrameConfig {
    /// Create a frame configuration.
    pub fn new(frame_length: usize, overlap_samples: usize) -> Self {
        Self {
            frame_length,
            overlap_samples,
        }
    }

    /// Stride between consecutive frame starts.
    ///
    /// Fails with [`Error::InvalidConfig`] unless
    /// `frame_length > overlap_samples`.
    pub fn hop(&self) -> Result<usize> {
        if self.frame_length == 0 {
            return Err(Error::invalid_config("frame length must be at least 1"));
        }
        if self.overlap_samples >= self.frame_length {
            return Err(Error::invalid_config(format!(
                "overlap ({}) must be smaller than frame length ({})",
                self.overlap_samples, self.frame_length
            )));
        }
        Ok(self.frame_length - self.overlap_samples)
    }
}

/// Number of frames needed to cover `len` samples.
///
/// Exact integer ceiling of `len / hop`.
pub fn frame_count(len: usize, config: &FrameConfig) -> Result<usize> {
    let hop = config.hop()?;
    Ok(len.div_ceil(hop))
}

/// Split samples into overlapping frames.
///
/// # Arguments
///
/// * `samples` - Samples to split (typically pre-emphasized)
/// * `frame_length` - Samples per frame
/// * `overlap_samples` - Samples shared by consecutive frames
///
/// # Returns
///
/// `ceil(len / hop)` frames; frame `i` covers `[i * hop, i * hop + frame_length)`
/// and the tail of the last frames is zero-padded. Empty input yields no frames.
pub fn frame(samples: &[f32], frame_length: usize, overlap_samples: usize) -> Result<Vec<Frame>> {
    frame_with(samples, &FrameConfig::new(frame_length, overlap_samples))
}

/// Split samples into frames using the default 1024/512 layout.
pub fn frame_default(samples: &[f32]) -> Result<Vec<Frame>> {
    frame_with(samples, &FrameConfig::default())
}

/// Split samples into frames described by `config`.
pub fn frame_with(samples: &[f32], config: &FrameConfig) -> Result<Vec<Frame>> {
    let hop = config.hop()?;
    let num_frames = samples.len().div_ceil(hop);

    let frames = (0..num_frames)
        .map(|index| {
            let start = index * hop;
            let end = (start + config.frame_length).min(samples.len());
            let mut frame_data = samples[start..end].to_vec();

            // Zero-pad if needed
            frame_data.resize(config.frame_length, 0.0);

            Frame {
                index,
                start_sample: start,
                samples: frame_data,
            }
        })
        .collect();

    Ok(frames)
}
