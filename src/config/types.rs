//! Configuration type definitions.

use crate::constants::pointer::DEFAULT_MOTION_INTERVAL_MS;
use crate::constants::{DEFAULT_FRAME_LENGTH, DEFAULT_OVERLAP_SAMPLES, DEFAULT_PRE_EMPHASIS_ALPHA};
use crate::preprocessing::{FrameConfig, PreprocessingConfig};
use crate::view::{EngineConfig, ViewMode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Signal preprocessing settings.
    #[serde(default)]
    pub preprocessing: PreprocessingSettings,

    /// Waveform view settings.
    #[serde(default)]
    pub view: ViewSettings,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Pre-emphasis and framing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessingSettings {
    /// Whether pre-emphasis runs before framing.
    pub pre_emphasis: bool,

    /// Pre-emphasis coefficient.
    pub pre_emphasis_alpha: f32,

    /// Samples per frame.
    pub frame_length: usize,

    /// Samples shared by consecutive frames.
    pub overlap_samples: usize,
}

impl Default for PreprocessingSettings {
    fn default() -> Self {
        Self {
            pre_emphasis: true,
            pre_emphasis_alpha: DEFAULT_PRE_EMPHASIS_ALPHA,
            frame_length: DEFAULT_FRAME_LENGTH,
            overlap_samples: DEFAULT_OVERLAP_SAMPLES,
        }
    }
}

impl PreprocessingSettings {
    /// Pipeline parameters described by these settings.
    pub fn to_pipeline_config(&self) -> PreprocessingConfig {
        PreprocessingConfig {
            pre_emphasis_alpha: self.pre_emphasis.then_some(self.pre_emphasis_alpha),
            frame: FrameConfig::new(self.frame_length, self.overlap_samples),
        }
    }
}

/// Waveform view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Minimum interval between processed drag/move events in ms.
    pub motion_interval_ms: u64,

    /// View mode a session starts in.
    pub default_view_mode: ViewMode,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            motion_interval_ms: DEFAULT_MOTION_INTERVAL_MS,
            default_view_mode: ViewMode::FullWaveform,
        }
    }
}

impl ViewSettings {
    /// Engine parameters described by these settings.
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            motion_interval: Duration::from_millis(self.motion_interval_ms),
            view_mode: self.default_view_mode,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Frame output format.
    pub format: OutputFormat,
}

/// Supported frame output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One row per frame.
    #[default]
    Csv,
    /// Whole frame sequence as a JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>().ok(), Some(OutputFormat::Json));
        assert!("parquet".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_preprocessing_defaults() {
        let settings = PreprocessingSettings::default();
        assert!(settings.pre_emphasis);
        assert_eq!(settings.pre_emphasis_alpha, 0.95);
        assert_eq!(settings.frame_length, 1024);
        assert_eq!(settings.overlap_samples, 512);
    }

    #[test]
    fn test_disabled_pre_emphasis_maps_to_none() {
        let settings = PreprocessingSettings {
            pre_emphasis: false,
            ..PreprocessingSettings::default()
        };
        assert_eq!(settings.to_pipeline_config().pre_emphasis_alpha, None);
    }

    #[test]
    fn test_view_settings_to_engine_config() {
        let config = ViewSettings::default().to_engine_config();
        assert_eq!(config.motion_interval, Duration::from_millis(25));
        assert_eq!(config.view_mode, ViewMode::FullWaveform);
    }
}
