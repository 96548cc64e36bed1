//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::constants::alpha;

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (inclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(min..=max).contains(&value) {
        return Err(format!(
            "{name} must be between {min} and {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate a pre-emphasis coefficient (0.0-1.0).
#[allow(clippy::cast_possible_truncation)]
pub fn parse_alpha(s: &str) -> Result<f32, String> {
    parse_bounded_float(
        s,
        f64::from(alpha::MIN),
        f64::from(alpha::MAX),
        "pre-emphasis alpha",
    )
    .map(|value| value as f32)
}

/// Parse and validate a frame length (at least one sample).
pub fn parse_frame_length(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid sample count"))?;

    if value == 0 {
        return Err("frame length must be at least 1 sample".to_string());
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alpha_valid() {
        assert_eq!(parse_alpha("0.95").ok(), Some(0.95));
        assert_eq!(parse_alpha("0.0").ok(), Some(0.0));
        assert_eq!(parse_alpha("1").ok(), Some(1.0));
    }

    #[test]
    fn test_parse_alpha_invalid() {
        assert!(parse_alpha("1.01").is_err());
        assert!(parse_alpha("-0.1").is_err());
        assert!(parse_alpha("NaN").is_err());
        assert!(parse_alpha("abc").is_err());
    }

    #[test]
    fn test_parse_bounded_float_valid() {
        assert_eq!(
            parse_bounded_float("50.0", -100.0, 100.0, "test").ok(),
            Some(50.0)
        );
        assert_eq!(
            parse_bounded_float("-100.0", -100.0, 100.0, "test").ok(),
            Some(-100.0)
        );
    }

    #[test]
    fn test_parse_bounded_float_error_names_parameter() {
        let err = parse_bounded_float("2", 0.0, 1.0, "gain").unwrap_err();
        assert!(err.contains("gain must be between"));
    }

    #[test]
    fn test_parse_frame_length() {
        assert_eq!(parse_frame_length("1024").ok(), Some(1024));
        assert!(parse_frame_length("0").is_err());
        assert!(parse_frame_length("-4").is_err());
    }
}
