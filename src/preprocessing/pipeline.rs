//! Signal preprocessing pipeline: pre-emphasis followed by framing.

use crate::audio::AudioSignal;
use crate::constants::{DEFAULT_PRE_EMPHASIS_ALPHA, alpha};
use crate::error::{Error, Result};
use crate::preprocessing::{Frame, FrameConfig, frame_with, pre_emphasis};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for one preprocessing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreprocessingConfig {
    /// Pre-emphasis coefficient, or `None` to skip the filter.
    pub pre_emphasis_alpha: Option<f32>,
    /// Frame layout.
    pub frame: FrameConfig,
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            pre_emphasis_alpha: Some(DEFAULT_PRE_EMPHASIS_ALPHA),
            frame: FrameConfig::default(),
        }
    }
}

impl PreprocessingConfig {
    /// Check every parameter before any work is done.
    pub fn validate(&self) -> Result<usize> {
        if let Some(a) = self.pre_emphasis_alpha
            && !(alpha::MIN..=alpha::MAX).contains(&a)
        {
            return Err(Error::invalid_config(format!(
                "pre-emphasis alpha must be between {} and {}, got {a}",
                alpha::MIN,
                alpha::MAX
            )));
        }
        self.frame.hop()
    }
}

/// Frames produced from one signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSequence {
    /// Sample rate of the source signal in Hz.
    pub sample_rate: u32,
    /// Samples per frame.
    pub frame_length: usize,
    /// Stride between frame starts in samples.
    pub hop: usize,
    /// Frames in index order.
    pub frames: Vec<Frame>,
}

impl FrameSequence {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no frames were produced.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Run pre-emphasis (when configured) and framing over a signal.
///
/// The configuration is validated up front, so an invalid frame layout never
/// produces partial output.
pub fn preprocess(signal: &AudioSignal, config: &PreprocessingConfig) -> Result<FrameSequence> {
    let hop = config.validate()?;

    let frames = match config.pre_emphasis_alpha {
        Some(a) => frame_with(&pre_emphasis(signal.samples(), a), &config.frame)?,
        None => frame_with(signal.samples(), &config.frame)?,
    };

    debug!(
        "Framed {} samples into {} frame(s) (length {}, hop {})",
        signal.len(),
        frames.len(),
        config.frame.frame_length,
        hop
    );

    Ok(FrameSequence {
        sample_rate: signal.sample_rate(),
        frame_length: config.frame.frame_length,
        hop,
        frames,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_applies_emphasis_then_frames() {
        let signal = AudioSignal::new(vec![1.0, 2.0, 3.0, 4.0], 4);
        let config = PreprocessingConfig {
            pre_emphasis_alpha: Some(0.5),
            frame: FrameConfig::new(2, 0),
        };

        let sequence = preprocess(&signal, &config).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.hop, 2);
        assert_eq!(sequence.frames[0].samples, vec![0.0, 1.5]);
        assert_eq!(sequence.frames[1].samples, vec![2.0, 2.5]);
    }

    #[test]
    fn test_preprocess_without_emphasis() {
        let signal = AudioSignal::new(vec![1.0, 2.0, 3.0], 3);
        let config = PreprocessingConfig {
            pre_emphasis_alpha: None,
            frame: FrameConfig::new(2, 1),
        };

        let sequence = preprocess(&signal, &config).unwrap();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.frames[2].samples, vec![3.0, 0.0]);
    }

    #[test]
    fn test_preprocess_rejects_bad_alpha() {
        let signal = AudioSignal::new(vec![1.0], 1);
        let config = PreprocessingConfig {
            pre_emphasis_alpha: Some(1.5),
            ..PreprocessingConfig::default()
        };
        assert!(matches!(
            preprocess(&signal, &config),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_preprocess_rejects_nan_alpha() {
        let config = PreprocessingConfig {
            pre_emphasis_alpha: Some(f32::NAN),
            ..PreprocessingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preprocess_empty_signal() {
        let signal = AudioSignal::new(Vec::new(), 44_100);
        let sequence = preprocess(&signal, &PreprocessingConfig::default()).unwrap();
        assert!(sequence.is_empty());
        assert_eq!(sequence.sample_rate, 44_100);
    }
}
