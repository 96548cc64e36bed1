//! In-memory audio signal.

use crate::constants::time::MS_PER_SECOND;

/// Mono audio samples with their sample rate.
///
/// Produced once by the loader (or by the host application) and never
/// mutated afterwards; preprocessing borrows the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSignal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioSignal {
    /// Wrap decoded mono samples.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Audio samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in whole milliseconds, truncated.
    ///
    /// A zero sample rate yields a zero duration.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn duration_ms(&self) -> i64 {
        if self.sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as f64 * MS_PER_SECOND / f64::from(self.sample_rate)) as i64
    }

    /// Consume the signal and return its samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_ms() {
        let signal = AudioSignal::new(vec![0.0; 48_000], 48_000);
        assert_eq!(signal.duration_ms(), 1_000);

        let signal = AudioSignal::new(vec![0.0; 22_050], 44_100);
        assert_eq!(signal.duration_ms(), 500);
    }

    #[test]
    fn test_duration_zero_rate() {
        let signal = AudioSignal::new(vec![0.0; 10], 0);
        assert_eq!(signal.duration_ms(), 0);
    }

    #[test]
    fn test_empty_signal() {
        let signal = AudioSignal::new(Vec::new(), 44_100);
        assert!(signal.is_empty());
        assert_eq!(signal.len(), 0);
        assert_eq!(signal.duration_ms(), 0);
    }
}
