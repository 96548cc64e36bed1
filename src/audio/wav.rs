//! PCM WAV loading using hound.

use crate::audio::AudioSignal;
use crate::error::{Error, Result};
use hound::{SampleFormat, WavReader};
use std::path::Path;
use tracing::debug;

/// Load a PCM WAV file as a mono signal.
///
/// Integer samples are scaled to `[-1.0, 1.0]`; multi-channel audio is mixed
/// down by averaging the channels of each frame.
pub fn load_wav(path: &Path) -> Result<AudioSignal> {
    let reader = WavReader::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));
    debug!(
        "WAV {}: {} Hz, {} channel(s), {} bit {:?}",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<f32>, hound::Error>>(),
        SampleFormat::Int => {
            let scale = int_scale(spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| scale_int(v, scale)))
                .collect::<std::result::Result<Vec<f32>, hound::Error>>()
        }
    }
    .map_err(|e| Error::AudioDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(AudioSignal::new(
        mix_to_mono(&interleaved, channels),
        spec.sample_rate,
    ))
}

/// Full-scale magnitude for a signed integer sample width.
fn int_scale(bits_per_sample: u16) -> f32 {
    let bits = i32::from(bits_per_sample.clamp(1, 32)) - 1;
    2.0_f32.powi(bits)
}

#[allow(clippy::cast_precision_loss)]
fn scale_int(value: i32, scale: f32) -> f32 {
    value as f32 / scale
}

/// Average interleaved channels into one.
fn mix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    #[allow(clippy::cast_precision_loss)]
    let divisor = channels as f32;
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / divisor)
        .collect()
}
