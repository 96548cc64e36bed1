//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "chirpview";

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default pre-emphasis coefficient.
///
/// Set to 0.0 to disable pre-emphasis.
pub const DEFAULT_PRE_EMPHASIS_ALPHA: f32 = 0.95;

/// Default number of samples per analysis frame.
pub const DEFAULT_FRAME_LENGTH: usize = 1024;

/// Default number of samples shared by consecutive frames (50% of the frame).
pub const DEFAULT_OVERLAP_SAMPLES: usize = DEFAULT_FRAME_LENGTH / 2;

/// Pre-emphasis coefficient bounds.
pub mod alpha {
    /// Minimum valid coefficient.
    pub const MIN: f32 = 0.0;
    /// Maximum valid coefficient.
    pub const MAX: f32 = 1.0;
}

/// Pointer handling constants.
pub mod pointer {
    /// Minimum interval between processed drag/move events, in milliseconds.
    pub const DEFAULT_MOTION_INTERVAL_MS: u64 = 25;

    /// Upper bound accepted for the motion interval, in milliseconds.
    pub const MAX_MOTION_INTERVAL_MS: u64 = 1_000;
}

/// Time conversion constants.
pub mod time {
    /// Milliseconds per second.
    pub const MS_PER_SECOND: f64 = 1_000.0;
}

/// Output file extensions by format.
pub mod output_extensions {
    /// CSV frame table extension.
    pub const CSV: &str = ".frames.csv";
    /// JSON frame dump extension.
    pub const JSON: &str = ".frames.json";
}

/// Decimal places for sample values in text output.
pub const SAMPLE_DECIMAL_PLACES: usize = 6;
