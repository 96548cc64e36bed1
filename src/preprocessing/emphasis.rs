//! Pre-emphasis filtering.

use crate::constants::DEFAULT_PRE_EMPHASIS_ALPHA;

/// Apply a first-difference pre-emphasis filter.
///
/// `output[0]` is always zero and `output[i] = samples[i] - alpha * samples[i - 1]`
/// for every later index, which lifts high-frequency content relative to low
/// frequencies. Non-finite samples propagate through the arithmetic.
#[allow(clippy::suboptimal_flops)]
pub fn pre_emphasis(samples: &[f32], alpha: f32) -> Vec<f32> {
    let mut output = Vec::with_capacity(samples.len());
    if samples.is_empty() {
        return output;
    }

    output.push(0.0);
    output.extend(samples.windows(2).map(|pair| pair[1] - alpha * pair[0]));
    output
}

/// Apply pre-emphasis with [`DEFAULT_PRE_EMPHASIS_ALPHA`].
pub fn pre_emphasis_default(samples: &[f32]) -> Vec<f32> {
    pre_emphasis(samples, DEFAULT_PRE_EMPHASIS_ALPHA)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-5, "{a} != {e}");
        }
    }

    #[test]
    fn test_pre_emphasis_scenario() {
        let output = pre_emphasis(&[1.0, 2.0, 3.0], 0.95);
        assert_close(&output, &[0.0, 1.05, 1.10]);
    }

    #[test]
    fn test_first_sample_is_zero() {
        let output = pre_emphasis(&[0.7, -0.2], 0.5);
        assert_eq!(output[0], 0.0);
    }

    #[test]
    fn test_zero_alpha_passes_samples_through() {
        let output = pre_emphasis(&[4.0, 5.0, 6.0], 0.0);
        assert_eq!(output, vec![0.0, 5.0, 6.0]);
    }

    #[test]
    fn test_empty_and_single_sample() {
        assert!(pre_emphasis(&[], 0.95).is_empty());
        assert_eq!(pre_emphasis(&[3.0], 0.95), vec![0.0]);
    }

    #[test]
    fn test_nan_propagates() {
        let output = pre_emphasis(&[1.0, f32::NAN, 1.0], 0.95);
        assert!(output[1].is_nan());
        assert!(output[2].is_nan());
    }

    #[test]
    #[allow(clippy::suboptimal_flops)]
    fn test_rounds_like_separate_multiply_and_subtract() {
        // 0.95 * 0.1 rounds before the subtraction
        let samples = [0.1, 0.2];
        let output = pre_emphasis(&samples, 0.95);
        assert_eq!(output[1], samples[1] - 0.95 * samples[0]);
    }

    #[test]
    fn test_default_alpha() {
        assert_eq!(
            pre_emphasis_default(&[1.0, 2.0]),
            pre_emphasis(&[1.0, 2.0], DEFAULT_PRE_EMPHASIS_ALPHA)
        );
    }
}
