//! Error types for chirpview.

/// Result type alias for chirpview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for chirpview.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame or filter parameters are unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the invalid parameter.
        message: String,
    },

    /// The viewport has no positive time-per-pixel ratio.
    #[error(
        "degenerate viewport: time per pixel is {time_per_pixel} (panel needs a positive width and range)"
    )]
    DegenerateViewport {
        /// The offending ratio.
        time_per_pixel: f64,
    },

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to read samples from an audio file.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to read a replay script.
    #[error("failed to read replay script '{path}'")]
    ScriptRead {
        /// Path to the script.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a replay script.
    #[error("failed to parse replay script '{path}'")]
    ScriptParse {
        /// Path to the script.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A replay script parsed but describes an impossible session.
    #[error("invalid replay script '{path}': {message}")]
    ScriptInvalid {
        /// Path to the script.
        path: std::path::PathBuf,
        /// What is wrong with it.
        message: String,
    },

    /// Output file exists and overwriting was not requested.
    #[error("output file '{path}' already exists (use --force to overwrite)")]
    OutputExists {
        /// Path to the existing file.
        path: std::path::PathBuf,
    },

    /// Failed to write CSV output.
    #[error("failed to write CSV output")]
    Csv(#[from] csv::Error),

    /// Failed to write JSON output.
    #[error("failed to write JSON output")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidConfig`] from any displayable message.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = Error::invalid_config("overlap must be smaller than frame length");
        assert_eq!(
            err.to_string(),
            "invalid configuration: overlap must be smaller than frame length"
        );
    }

    #[test]
    fn test_degenerate_viewport_message() {
        let err = Error::DegenerateViewport {
            time_per_pixel: 0.0,
        };
        assert!(err.to_string().starts_with("degenerate viewport"));
    }
}
