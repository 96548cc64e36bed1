//! Configuration validation.

use crate::config::Config;
use crate::constants::{alpha, pointer::MAX_MOTION_INTERVAL_MS};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_preprocessing(config)?;
    validate_view(config)?;
    Ok(())
}

/// Validate preprocessing settings.
fn validate_preprocessing(config: &Config) -> Result<()> {
    let settings = &config.preprocessing;

    // Validate alpha range
    if !(alpha::MIN..=alpha::MAX).contains(&settings.pre_emphasis_alpha) {
        return Err(Error::ConfigValidation {
            message: format!(
                "pre_emphasis_alpha must be between {} and {}, got {}",
                alpha::MIN,
                alpha::MAX,
                settings.pre_emphasis_alpha
            ),
        });
    }

    // Validate frame length is at least 1
    if settings.frame_length == 0 {
        return Err(Error::ConfigValidation {
            message: "frame_length must be at least 1".to_string(),
        });
    }

    // Validate overlap leaves a positive hop
    if settings.overlap_samples >= settings.frame_length {
        return Err(Error::ConfigValidation {
            message: format!(
                "overlap_samples ({}) must be smaller than frame_length ({})",
                settings.overlap_samples, settings.frame_length
            ),
        });
    }

    Ok(())
}

/// Validate view settings.
fn validate_view(config: &Config) -> Result<()> {
    if config.view.motion_interval_ms > MAX_MOTION_INTERVAL_MS {
        return Err(Error::ConfigValidation {
            message: format!(
                "motion_interval_ms must be at most {MAX_MOTION_INTERVAL_MS}, got {}",
                config.view.motion_interval_ms
            ),
        });
    }

    Ok(())
}
